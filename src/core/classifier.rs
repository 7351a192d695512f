use crate::core::parser;
use crate::domain::model::{
    ClassificationError, ClassificationResponse, ClassificationResult, Parity, ParsedNumber,
    FUN_FACT_FALLBACK,
};
use crate::domain::ports::TriviaLookup;

/// Inputs up to this bound are checked by plain trial division.
const TRIAL_DIVISION_LIMIT: u64 = 1 << 40;

pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    if n <= TRIAL_DIVISION_LIMIT {
        trial_division_prime(n)
    } else {
        miller_rabin(n)
    }
}

fn trial_division_prime(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic for every u64 with these witnesses. Requires `n > 37`.
fn miller_rabin(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    let rounds = (n - 1).trailing_zeros();
    let d = (n - 1) >> rounds;

    'witness: for &a in &WITNESSES {
        if n % a == 0 {
            return false;
        }
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..rounds {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Sum of proper divisors equals the number. False for `n <= 0`.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    if n <= TRIAL_DIVISION_LIMIT {
        return proper_divisor_sum_is(n);
    }

    // Euclid-Euler: even perfect numbers are 2^(p-1) * (2^p - 1) with 2^p - 1 prime.
    // No odd perfect number exists below 10^1500.
    let exponent = n.trailing_zeros();
    let odd_part = n >> exponent;
    exponent > 0 && odd_part == (1u64 << (exponent + 1)) - 1 && is_prime(odd_part as i64)
}

fn proper_divisor_sum_is(n: u64) -> bool {
    let mut sum = 1u64;
    let mut divisor = 2u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            sum += divisor;
            let paired = n / divisor;
            if paired != divisor {
                sum += paired;
            }
            if sum > n {
                return false;
            }
        }
        divisor += 1;
    }
    sum == n
}

/// Negative numbers are never Armstrong numbers; zero and single digits always are.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let magnitude = n as u64;
    let digits = decimal_digits(magnitude);
    let power = digits.len() as u32;

    // Nineteen terms of 9^19 overflow u64.
    let total: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    total == u128::from(magnitude)
}

pub fn parity(n: i64) -> Parity {
    if n % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

pub fn digit_sum(n: i64) -> u64 {
    decimal_digits(n.unsigned_abs()).iter().sum()
}

fn decimal_digits(mut magnitude: u64) -> Vec<u64> {
    if magnitude == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(magnitude % 10);
        magnitude /= 10;
    }
    digits.reverse();
    digits
}

pub struct NumberClassifier<T: TriviaLookup> {
    trivia: T,
    reject_negatives: bool,
}

impl<T: TriviaLookup> NumberClassifier<T> {
    pub fn new(trivia: T, reject_negatives: bool) -> Self {
        Self {
            trivia,
            reject_negatives,
        }
    }

    pub fn rejects_negatives(&self) -> bool {
        self.reject_negatives
    }

    /// Applies the negative-number policy to a parsed value.
    pub fn admit(&self, parsed: ParsedNumber) -> Result<i64, ClassificationError> {
        if self.reject_negatives && parsed.value < 0 {
            return Err(ClassificationError::Negative { input: parsed.raw });
        }
        Ok(parsed.value)
    }

    pub async fn fun_fact(&self, n: i64) -> String {
        match self.trivia.lookup(n).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Falling back to default fun fact for {}: {}", n, e);
                FUN_FACT_FALLBACK.to_string()
            }
        }
    }

    pub async fn classify(&self, n: i64) -> ClassificationResult {
        let result = ClassificationResult {
            number: n,
            is_prime: is_prime(n),
            is_perfect: is_perfect(n),
            is_armstrong: is_armstrong(n),
            parity: parity(n),
            digit_sum: digit_sum(n),
            fun_fact: self.fun_fact(n).await,
        };
        tracing::debug!("Classified {}: {:?}", n, result);
        result
    }

    /// Parse, admit, classify and shape one request.
    pub async fn handle(
        &self,
        raw: Option<&str>,
    ) -> Result<ClassificationResponse, ClassificationError> {
        let parsed = parser::parse(raw)?;
        let n = self.admit(parsed)?;
        Ok(self.classify(n).await.into())
    }
}
