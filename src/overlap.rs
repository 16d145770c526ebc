//! Intersections between time spans

use crate::traits::TimeSpan;

/// Whether two spans intersect.
///
/// Spans are closed: two events where one ends exactly when the other starts *do* overlap
/// (by zero minutes), so that back-to-back events still go through the tolerance check.
pub fn intervals_overlap<A: TimeSpan + ?Sized, B: TimeSpan + ?Sized>(a: &A, b: &B) -> bool {
    a.end() >= b.start() && b.end() >= a.start()
}

/// How many whole minutes two spans share. This is 0 for disjoint or merely touching spans
pub fn overlap_minutes<A: TimeSpan + ?Sized, B: TimeSpan + ?Sized>(a: &A, b: &B) -> i64 {
    let overlap_start = a.start().max(b.start());
    let overlap_end = a.end().min(b.end());
    (overlap_end - overlap_start).num_minutes().max(0)
}
