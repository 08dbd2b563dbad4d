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

use crate::s3::utils::get_default_text;
use xmltree::Element;

/// The `<Error>` document S3 compatible services return with failed requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub resource: String,
    pub request_id: String,
    pub host_id: String,
    pub bucket_name: String,
    pub object_name: String,
}

impl ErrorResponse {
    /// Reads an error document, or returns `None` if the root is not `<Error>`.
    pub fn from_element(root: &Element) -> Option<ErrorResponse> {
        if root.name != "Error" {
            return None;
        }

        Some(ErrorResponse {
            code: get_default_text(root, "Code"),
            message: get_default_text(root, "Message"),
            resource: get_default_text(root, "Resource"),
            request_id: get_default_text(root, "RequestId"),
            host_id: get_default_text(root, "HostId"),
            bucket_name: get_default_text(root, "BucketName"),
            object_name: get_default_text(root, "Key"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchBucket</Code><Message>The specified bucket does not exist</Message><BucketName>photos</BucketName><Resource>/photos</Resource><RequestId>17A</RequestId></Error>"#;
        let root = Element::parse(xml.as_bytes()).unwrap();
        let er = ErrorResponse::from_element(&root).unwrap();
        assert_eq!(er.code, "NoSuchBucket");
        assert_eq!(er.bucket_name, "photos");
        assert_eq!(er.request_id, "17A");
        assert!(er.object_name.is_empty());
    }

    #[test]
    fn test_non_error_root_is_ignored() {
        let root = Element::parse("<ListBucketResult/>".as_bytes()).unwrap();
        assert!(ErrorResponse::from_element(&root).is_none());
    }
}
