pub mod types;
pub use types::*;

use std::cmp::{max, min};

use tracing::trace;

/// Furthest-reaching x coordinate per diagonal `k`, for one search
/// direction. Diagonals are wrapped modulo the slot count so the centered
/// band fits in `2 * min(n, m) + 2` slots regardless of how far the search
/// radius grows.
struct Frontier {
    slots: Vec<isize>,
    len: isize,
}

impl Frontier {
    fn new(len: usize) -> Self {
        Frontier {
            slots: vec![0; len],
            len: len as isize,
        }
    }

    fn get(&self, k: isize) -> isize {
        self.slots[k.rem_euclid(self.len) as usize]
    }

    fn set(&mut self, k: isize, x: isize) {
        self.slots[k.rem_euclid(self.len) as usize] = x;
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Total path lengths with this parity can terminate in this direction.
    fn parity(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => 0,
        }
    }

    /// Maps a local search coordinate to a slice index, so one
    /// snake-following loop serves both directions.
    fn index(self, len: usize, i: isize) -> usize {
        match self {
            Direction::Forward => i as usize,
            Direction::Reverse => len - 1 - i as usize,
        }
    }
}

/// The diagonal run `(x, y) -> (u, v)` a shortest path is guaranteed to
/// cross, in coordinates local to the current sub-problem, together with
/// the sub-problem's edit distance `d`. Lives only long enough to split
/// one recursive step.
struct MiddleSnake {
    d: isize,
    x: usize,
    y: usize,
    u: usize,
    v: usize,
}

/// Computes the minimal insert/delete edit script turning `left` into
/// `right`.
///
/// # Examples
///
/// ```
/// use midsnake::myers::{diff, Edit};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3];
/// let script = diff(&old, &new);
/// assert_eq!(script, vec![Edit::Delete { position_old: 1 }]);
/// ```
///
/// # Arguments
///
/// * `left` - The original sequence
/// * `right` - The target sequence
pub fn diff<T: PartialEq>(left: &[T], right: &[T]) -> EditScript {
    diff_from(left, right, 0, 0)
}

/// Like [`diff`], with every recorded position shifted by the given
/// offsets. Useful when the two slices are themselves windows into larger
/// sequences and the script should speak in the outer index space.
pub fn diff_from<T: PartialEq>(
    left: &[T],
    right: &[T],
    left_offset: usize,
    right_offset: usize,
) -> EditScript {
    let mut script = Vec::new();
    bisect(left, right, left_offset, right_offset, &mut script);
    script
}

/// Computes the diff between two strings after breaking them into lines.
/// Positions in the script are line numbers.
pub fn diff_lines(old: &str, new: &str) -> EditScript {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    diff(&old_lines, &new_lines)
}

/// Edit distance under insert/delete-only operations, computed by the
/// forward-only greedy search. Always equals `diff(left, right).len()`,
/// without materializing a script.
pub fn distance<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    if left.is_empty() || right.is_empty() {
        return left.len() + right.len();
    }

    let mid = left.len() + right.len();
    let mut values = vec![0usize; 2 * mid + 1];

    for depth in 0..=mid {
        let lower = mid - depth;
        let upper = mid + depth;

        for k in (lower..=upper).step_by(2) {
            let mut x = if k == lower || (k != upper && values[k - 1] < values[k + 1]) {
                values[k + 1]
            } else {
                values[k - 1] + 1
            };
            let mut y = mid + x - k;

            while x < left.len() && y < right.len() && left[x] == right[y] {
                x += 1;
                y += 1;
            }

            values[k] = x;

            if x >= left.len() && y >= right.len() {
                return depth;
            }
        }
    }

    mid
}

fn bisect<T: PartialEq>(
    left: &[T],
    right: &[T],
    left_offset: usize,
    right_offset: usize,
    out: &mut EditScript,
) {
    trace!(
        left_len = left.len(),
        right_len = right.len(),
        left_offset,
        right_offset,
        "bisect"
    );

    if left.is_empty() {
        out.extend((0..right.len()).map(|i| Edit::Insert {
            position_old: left_offset,
            position_new: right_offset + i,
        }));
        return;
    }
    if right.is_empty() {
        out.extend((0..left.len()).map(|i| Edit::Delete {
            position_old: left_offset + i,
        }));
        return;
    }

    let snake = find_middle_snake(left, right);
    trace!(
        d = snake.d,
        x = snake.x,
        y = snake.y,
        u = snake.u,
        v = snake.v,
        "middle snake"
    );

    let n = left.len();
    let m = right.len();

    if snake.d > 1 || (snake.x != snake.u && snake.y != snake.v) {
        bisect(&left[..snake.x], &right[..snake.y], left_offset, right_offset, out);
        bisect(
            &left[snake.u..],
            &right[snake.v..],
            left_offset + snake.u,
            right_offset + snake.v,
            out,
        );
    } else if m > n {
        bisect(&[], &right[n..], left_offset + n, right_offset + n, out);
    } else if m < n {
        bisect(&left[m..], &[], left_offset + m, right_offset + m, out);
    }
    // d <= 1 with a trivial snake and equal lengths: the slices are identical
}

/// Runs the forward and reverse searches in lockstep, one radius at a
/// time, until their frontiers meet or cross on some diagonal.
fn find_middle_snake<T: PartialEq>(left: &[T], right: &[T]) -> MiddleSnake {
    let n = left.len() as isize;
    let m = right.len() as isize;
    let total = n + m;
    let band = (2 * min(n, m) + 2) as usize;

    let mut forward = Frontier::new(band);
    let mut reverse = Frontier::new(band);

    for h in 0..=total / 2 + total % 2 {
        if let Some(snake) = sweep(Direction::Forward, left, right, h, &mut forward, &reverse) {
            return snake;
        }
        if let Some(snake) = sweep(Direction::Reverse, left, right, h, &mut reverse, &forward) {
            return snake;
        }
    }

    // the searches must meet within ceil((n + m) / 2) radii
    unreachable!("forward and reverse searches never met");
}

/// One breadth-first expansion of a single direction's frontier at radius
/// `h`, including the overlap test against the opposing frontier.
fn sweep<T: PartialEq>(
    direction: Direction,
    left: &[T],
    right: &[T],
    h: isize,
    own: &mut Frontier,
    other: &Frontier,
) -> Option<MiddleSnake> {
    let n = left.len() as isize;
    let m = right.len() as isize;
    let total = n + m;
    let delta = n - m;
    let parity = direction.parity();

    // diagonals reachable at this radius, clipped to the grid
    let k_min = -(h - 2 * max(0, h - m));
    let k_max = h - 2 * max(0, h - n);

    let mut k = k_min;
    while k <= k_max {
        let mut a = if k == -h || (k != h && own.get(k - 1) < own.get(k + 1)) {
            own.get(k + 1)
        } else {
            own.get(k - 1) + 1
        };
        let mut b = a - k;
        let (s, t) = (a, b);

        while a < n
            && b < m
            && left[direction.index(left.len(), a)] == right[direction.index(right.len(), b)]
        {
            a += 1;
            b += 1;
        }
        own.set(k, a);

        let mirror = -(k - delta);
        if total % 2 == parity
            && mirror >= -(h - parity)
            && mirror <= h - parity
            && own.get(k) + other.get(mirror) >= n
        {
            return Some(match direction {
                Direction::Forward => MiddleSnake {
                    d: 2 * h - 1,
                    x: s as usize,
                    y: t as usize,
                    u: a as usize,
                    v: b as usize,
                },
                Direction::Reverse => MiddleSnake {
                    d: 2 * h,
                    x: (n - a) as usize,
                    y: (m - b) as usize,
                    u: (n - s) as usize,
                    v: (m - t) as usize,
                },
            });
        }

        k += 2;
    }

    None
}
