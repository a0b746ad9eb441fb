use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*-_=+";

/// 生成随机密钥
pub fn generate_secret(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret() {
        let a = generate_secret(88);
        let b = generate_secret(88);
        assert_eq!(a.len(), 88);
        assert!(a.bytes().all(|c| CHARSET.contains(&c)));
        assert_ne!(a, b);
    }
}
