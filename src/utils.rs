/// Compute the greatest common divisor of two signed integers
/// with the iterative Euclidean algorithm.
///
/// The result is always non-negative and `gcd_signed(x, 0) == |x|`.
/// It is returned as a `u64`, since `gcd_signed(i64::MIN, 0) == 2^63`
/// does not fit in an `i64`.
pub fn gcd_signed(mut a: i64, mut b: i64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}
