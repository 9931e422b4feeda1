use num_integer::Roots;

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    num_integer::gcd(a, b)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a·x + b·y = g` where `g = gcd(a, b)`.
///
/// # Example
///
/// ```
/// # use lu_cipher::field::extended_gcd;
/// let (g, x, y) = extended_gcd(240, 46);
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, 2);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        return (-old_r, -old_s, -old_t);
    }
    (old_r, old_s, old_t)
}

/// Trial-division primality test. Moduli in this crate are small.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let limit = n.sqrt();
    (3..=limit).step_by(2).all(|d| n % d != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_extended_gcd_coprime() {
        let (g, x, y) = extended_gcd(5, 37);
        assert_eq!(g, 1);
        assert_eq!(5 * x + 37 * y, 1);
    }

    #[test]
    fn test_extended_gcd_with_zero() {
        assert_eq!(extended_gcd(7, 0), (7, 1, 0));
        assert_eq!(extended_gcd(0, 7), (7, 0, 1));
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
        assert!(!is_prime(1));
        assert!(!is_prime(49));
    }

    #[quickcheck]
    fn prop_extended_gcd_bezout(a: i32, b: i32) -> bool {
        let (a, b) = (a as i64, b as i64);
        let (g, x, y) = extended_gcd(a, b);
        g == gcd(a, b) && a * x + b * y == g
    }
}
