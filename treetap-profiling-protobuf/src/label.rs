// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{scalar_opt, Message, StringOffset};

/// Label carries additional context for a sample, e.g. an allocation size
/// or a thread id.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Label {
    /// An annotation key, e.g. "allocation".
    pub key: StringOffset,
    /// At most one of `str` and `num` should be used.
    pub str: StringOffset,
    /// At most one of `str` and `num` should be used.
    pub num: i64,
    /// Units of `num`; only meaningful when `num` is present.
    pub num_unit: StringOffset,
}

impl Message for Label {
    fn encode(&self, buf: &mut Vec<u8>) {
        scalar_opt(1, self.key, buf);
        scalar_opt(2, self.str, buf);
        scalar_opt(3, self.num, buf);
        scalar_opt(4, self.num_unit, buf);
    }
}

#[cfg(feature = "prost_impls")]
impl From<&Label> for crate::prost_impls::Label {
    fn from(label: &Label) -> Self {
        Self {
            key: label.key.into(),
            str: label.str.into(),
            num: label.num,
            num_unit: label.num_unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prost_impls;
    use prost::Message as _;

    #[test]
    fn empty() {
        let mut buf = Vec::new();
        Label::default().encode(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn roundtrip() {
        bolero::check!().with_type::<Label>().for_each(|label| {
            let mut buf = Vec::new();
            label.encode(&mut buf);
            let decoded = prost_impls::Label::decode(buf.as_slice()).unwrap();
            assert_eq!(prost_impls::Label::from(label), decoded);
        });
    }
}
