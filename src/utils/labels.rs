/// Whether column `idx` of `len` gets an axis label when at most `max_labels`
/// labels fit.
///
/// The first and last columns are always labelled. When every column fits
/// they are all labelled; otherwise labels are spread at an even stride.
pub fn should_label(idx: usize, len: usize, max_labels: usize) -> bool {
    if idx >= len {
        return false;
    }
    if idx == 0 || idx == len - 1 || len <= max_labels {
        return true;
    }

    let slots = max_labels.saturating_sub(1).max(1);
    let stride = (len - 1).div_ceil(slots).max(1);
    idx % stride == 0
}
