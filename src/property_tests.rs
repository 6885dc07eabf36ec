//! Property-based tests over randomly generated loops.
//!
//! Loops are "skylines": up the left column from the bottom-left start, across the grid with a vertical run in every column,
//! down the right column, then back along the bottom row. Every tile off the loop is random junk.
//! The tiles strictly between each inner column's run and the bottom row are exactly the enclosed ones.

#[cfg(test)]
mod prop_tests {
    use std::collections::HashSet;

    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::fixtures::CLOSED;
    use crate::interior::count_enclosed_by_rays;
    use crate::{Board, Direction, Location, PipeShape};

    const JUNK: [char; 7] = ['.', '|', '-', 'L', 'J', '7', 'F'];

    /// Width, height and, for each column boundary, the row the loop crosses it at.
    fn arb_skyline() -> impl Strategy<Value = (usize, usize, Vec<usize>, Vec<char>)> {
        (2usize..12, 2usize..10).prop_flat_map(|(width, height)| (
            Just(width),
            Just(height),
            prop::collection::vec(0..height - 1, width - 1),
            prop::collection::vec(prop::sample::select(JUNK.to_vec()), width * height),
        ))
    }

    fn skyline_path(width: usize, height: usize, tops: &[usize]) -> Vec<Location> {
        let bottom = height - 1;
        let mut path = (tops[0]..=bottom).rev().map(|y| Location(0, y)).collect_vec();

        for x in 1..width {
            let from = tops[x - 1];
            let to = if x + 1 < width { tops[x] } else { bottom };
            if from <= to {
                path.extend((from..=to).map(|y| Location(x, y)));
            } else {
                path.extend((to..=from).rev().map(|y| Location(x, y)));
            }
        }

        path.extend((1..width - 1).rev().map(|x| Location(x, bottom)));
        path
    }

    fn render(width: usize, path: &[Location], junk: Vec<char>) -> String {
        let mut symbols = junk;
        for (i, here) in path.iter().enumerate() {
            let prev = path[(i + path.len() - 1) % path.len()];
            let next = path[(i + 1) % path.len()];
            let exits = [Direction::direction_to(*here, prev).unwrap(), Direction::direction_to(*here, next).unwrap()];
            symbols[here.1 * width + here.0] = PipeShape::all_matching(&exits)[0].symbol();
        }
        symbols[path[0].1 * width + path[0].0] = 'S';

        symbols.chunks(width).map(|row| row.iter().collect::<String>()).join("\n")
    }

    fn expected_enclosed(width: usize, height: usize, tops: &[usize]) -> usize {
        (1..width - 1).map(|x| height - 2 - tops[x - 1].max(tops[x])).sum()
    }

    proptest! {
        /// Property: the traced loop is the generated one and every derived count matches the construction
        #[test]
        fn prop_skyline_loops((width, height, tops, junk) in arb_skyline()) {
            let path = skyline_path(width, height, &tops);
            let board: Board = render(width, &path, junk).parse().unwrap();

            // the path climbs the left column first, which is the reversed walk from an `L` start
            let cycle = board.trace_reversed().collect::<Result<Vec<_>, _>>().unwrap();
            prop_assert_eq!(&cycle, &path);

            let solution = board.solve().unwrap();
            prop_assert_eq!(solution.loop_length, path.len());
            prop_assert_eq!(solution.max_distance, path.len() / 2);
            prop_assert_eq!(solution.enclosed, expected_enclosed(width, height, &tops));
        }

        /// Property: ray casting and flood filling agree, and the regions cover the grid exactly once
        #[test]
        fn prop_counts_agree((width, height, tops, junk) in arb_skyline()) {
            let path = skyline_path(width, height, &tops);
            let board: Board = render(width, &path, junk).parse().unwrap();
            let cycle = board.trace_loop().unwrap();

            let enclosure = board.enclosure().unwrap();
            prop_assert_eq!(count_enclosed_by_rays(&board, &cycle), enclosure.inside());
            prop_assert_eq!(enclosure.inside() + enclosure.outside() + enclosure.loop_length(), width * height);
        }

        /// Property: walking either way around visits the same tiles, the same number of times
        #[test]
        fn prop_direction_is_immaterial((width, height, tops, junk) in arb_skyline()) {
            let path = skyline_path(width, height, &tops);
            let board: Board = render(width, &path, junk).parse().unwrap();

            let forward = board.trace().collect::<Result<Vec<_>, _>>().unwrap();
            let backward = board.trace_reversed().collect::<Result<Vec<_>, _>>().unwrap();

            prop_assert_eq!(forward.len(), backward.len());
            prop_assert_eq!(crate::max_distance(forward.len()), crate::max_distance(backward.len()));
            prop_assert_eq!(forward.iter().collect::<HashSet<_>>(), backward.iter().collect::<HashSet<_>>());
            // same cycle, opposite order
            prop_assert_eq!(&forward[1..], &backward[1..].iter().rev().copied().collect_vec()[..]);
        }
    }

    #[test]
    fn fixtures_walk_the_same_either_way() {
        for (text, _, _) in CLOSED {
            let board: Board = text.parse().unwrap();
            let forward = board.trace().collect::<Result<Vec<_>, _>>().unwrap();
            let mut backward = board.trace_reversed().collect::<Result<Vec<_>, _>>().unwrap();

            backward[1..].reverse();
            assert_eq!(forward, backward);
        }
    }
}
