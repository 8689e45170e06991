// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

/// Primality by trial division, independent of the sieve.
pub fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Every maximal progression of three or more primes `<= bound`, found by brute
/// force and ordered by its first two terms.
pub fn reference_progressions(bound: u64) -> Vec<Vec<u64>> {
    let primes: Vec<u64> = (2..=bound).filter(|&n| is_prime(n)).collect();
    let mut found = Vec::new();
    for (n, &a) in primes.iter().enumerate() {
        for &b in &primes[n + 1..] {
            // Not maximal if it extends backwards.
            if a >= b - a && is_prime(2 * a - b) {
                continue;
            }
            let mut terms = vec![a, b];
            loop {
                let next = 2 * terms[terms.len() - 1] - terms[terms.len() - 2];
                if next > bound || !is_prime(next) {
                    break;
                }
                terms.push(next);
            }
            if terms.len() >= 3 {
                found.push(terms);
            }
        }
    }
    found
}

/// Render progressions the way the binary prints them.
pub fn render(progressions: &[Vec<u64>]) -> String {
    let mut out = String::new();
    for terms in progressions {
        let line: Vec<String> = terms.iter().map(u64::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out.push_str(&format!("Total: {}\n", progressions.len()));
    out
}
