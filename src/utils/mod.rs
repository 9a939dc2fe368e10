use std::io::{BufReader, Read};

use serde::de::DeserializeOwned;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_exact() {
        assert_eq!(
            "2024-03-11".split_exact::<3>("-"),
            [Some("2024"), Some("03"), Some("11")]
        );
        assert_eq!("2024-03".split_exact::<3>("-"), [Some("2024"), Some("03"), None]);
        assert_eq!(
            "a-b-c-d".split_exact::<3>("-"),
            [Some("a"), Some("b"), Some("c-d")]
        );
    }
}
