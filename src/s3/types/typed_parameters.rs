// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::s3::error::ValidationErr;
use crate::s3::types::Bucket;
use crate::s3::utils::check_bucket_name;
use std::fmt;

/// Name of a bucket, used as a lightweight handle to it.
///
/// A `BucketName` refers to a bucket by identity only; holding one does not keep any
/// [`Bucket`] record alive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Creates a new validated bucket name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErr::InvalidBucketName`] if the name doesn't meet S3 requirements.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        check_bucket_name(&name, false)?;
        Ok(Self(name))
    }

    /// Creates a new strictly validated bucket name (lowercase letters, digits, `-` and `.`).
    pub fn new_strict(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        check_bucket_name(&name, true)?;
        Ok(Self(name))
    }

    /// Wraps a name reported by the service itself.
    pub(crate) fn from_service(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BucketName {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BucketName {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BucketName {
    type Error = ValidationErr;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<&Bucket> for BucketName {
    fn from(bucket: &Bucket) -> Self {
        bucket.handle()
    }
}

impl From<&BucketName> for BucketName {
    fn from(name: &BucketName) -> Self {
        name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_name_validation() {
        assert_eq!(BucketName::new("photos").unwrap().as_str(), "photos");
        assert!(BucketName::new("ab").is_err());
        assert!(BucketName::new("192.168.1.1").is_err());
        assert!(BucketName::new("My_Bucket").is_ok());
        assert!(BucketName::new_strict("My_Bucket").is_err());
        assert!("".parse::<BucketName>().is_err());
    }

    #[test]
    fn test_bucket_handle() {
        let bucket = Bucket {
            name: "photos".into(),
            creation_date: None,
        };
        let handle = BucketName::from(&bucket);
        drop(bucket);
        assert_eq!(handle.to_string(), "photos");
        assert!(BucketName::default().is_empty());
    }
}
