// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{scalar_opt, Message, StringOffset};

/// ValueType describes the semantics and measurement units of a value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct ValueType {
    pub r#type: StringOffset,
    pub unit: StringOffset,
}

impl ValueType {
    /// True when both offsets name the empty string, i.e. the record holds
    /// no content worth emitting.
    pub fn is_empty(&self) -> bool {
        self.r#type.is_zero() && self.unit.is_zero()
    }
}

impl Message for ValueType {
    fn encode(&self, buf: &mut Vec<u8>) {
        scalar_opt(1, self.r#type, buf);
        scalar_opt(2, self.unit, buf);
    }
}

#[cfg(feature = "prost_impls")]
impl From<&ValueType> for crate::prost_impls::ValueType {
    fn from(value: &ValueType) -> Self {
        Self {
            r#type: value.r#type.into(),
            unit: value.unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{message, prost_impls};
    use prost::Message as _;

    #[test]
    fn empty() {
        let mut buf = Vec::new();
        ValueType::default().encode(&mut buf);
        assert!(buf.is_empty());
        assert!(ValueType::default().is_empty());
    }

    #[test]
    fn golden() {
        let value_type = ValueType {
            r#type: StringOffset::new(2),
            unit: StringOffset::new(1),
        };
        let mut buf = Vec::new();
        message(11, &value_type, &mut buf);
        assert_eq!(&[0x5A, 0x04, 0x08, 0x02, 0x10, 0x01], buf.as_slice());
    }

    #[test]
    fn roundtrip() {
        bolero::check!()
            .with_type::<ValueType>()
            .for_each(|value_type| {
                let mut buf = Vec::new();
                value_type.encode(&mut buf);
                let decoded = prost_impls::ValueType::decode(buf.as_slice()).unwrap();
                assert_eq!(prost_impls::ValueType::from(value_type), decoded);
            });
    }
}
