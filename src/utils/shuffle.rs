use rand::Rng;

/// Classic in-place Fisher-Yates: for each index `i`, pick `j` uniformly in
/// `[i, len - 1]` and swap. Swapping `i` with itself is a legal no-op.
/// Sequences of length <= 1 are left untouched.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut impl Rng) {
    let len = items.len();
    if len <= 1 {
        return;
    }
    for i in 0..len - 1 {
        let j = rng.gen_range(i..len);
        items.swap(i, j);
    }
}
