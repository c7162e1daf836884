use crate::error::Result;
use crate::list::OrderedList;

pub fn merge_sort<T: Ord>(list: &mut OrderedList<T>) {
    let len = list.length();
    if len > 1 {
        msort(list, 0, len - 1);
    }
}

/// Sort the elements at indexes `lo..=hi`.
fn msort<T: Ord>(list: &mut OrderedList<T>, lo: usize, hi: usize) {
    if lo < hi {
        let mid = lo + (hi - lo) / 2;
        msort(list, lo, mid);
        msort(list, mid + 1, hi);
        merge(list, lo, mid, hi).expect("merge window lies inside the list");
    }
}

/// Merge the sorted runs `lo..=mid` and `mid + 1..=hi` in place.
///
/// Both runs are cut out of the list into lists of their own. A cursor on each
/// run moves the smaller head node into a temporary list, taking the left one
/// on ties, and the merged nodes are spliced back at `lo`. The list is left
/// untouched if the window does not fit in it.
fn merge<T: Ord>(list: &mut OrderedList<T>, lo: usize, mid: usize, hi: usize) -> Result<()> {
    log::trace!("merge [{}, {}] with [{}, {}]", lo, mid, mid + 1, hi);
    let mut left = list.cut(lo, mid - lo + 1)?;
    let mut right = match list.cut(lo, hi - mid) {
        Ok(right) => right,
        Err(err) => {
            list.insert_list(lo, &mut left)?;
            return Err(err);
        }
    };

    let mut merged = OrderedList::new();
    merge_runs(&mut left, &mut right, &mut merged);
    list.insert_list(lo, &mut merged)
}

/// Move every node of `left` and `right` to the back of `merged`, smaller first.
fn merge_runs<T: Ord>(
    left: &mut OrderedList<T>,
    right: &mut OrderedList<T>,
    merged: &mut OrderedList<T>,
) {
    let mut out = merged.cursor_mut();
    let mut left = left.cursor_mut();
    let mut right = right.cursor_mut();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let run = if take_left { &mut left } else { &mut right };
        run.next().expect("a peeked element can be yielded");
        out.attach(run.detach().expect("a yielded element can be detached"));
    }
}
