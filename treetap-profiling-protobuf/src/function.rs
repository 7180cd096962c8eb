// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{scalar_opt, Message, StringOffset};

/// A deduplicated (source file, name) record.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Function {
    /// Unique nonzero id, assigned in table order.
    pub id: u64,
    /// Name of the function, in human-readable form if available.
    pub name: StringOffset,
    /// Name of the function, as identified by the system. The profiles
    /// built here never receive a distinct system name, so this always
    /// equals `name`.
    pub system_name: StringOffset,
    /// Source file containing the function.
    pub filename: StringOffset,
    /// Line of the function's first observation. May be negative; it is
    /// encoded as-is.
    pub start_line: i64,
}

impl Message for Function {
    fn encode(&self, buf: &mut Vec<u8>) {
        scalar_opt(1, self.id, buf);
        scalar_opt(2, self.name, buf);
        scalar_opt(3, self.system_name, buf);
        scalar_opt(4, self.filename, buf);
        scalar_opt(5, self.start_line, buf);
    }
}

#[cfg(feature = "prost_impls")]
impl From<&Function> for crate::prost_impls::Function {
    fn from(function: &Function) -> Self {
        Self {
            id: function.id,
            name: function.name.into(),
            system_name: function.system_name.into(),
            filename: function.filename.into(),
            start_line: function.start_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prost_impls;
    use prost::Message as _;

    #[test]
    fn golden() {
        let function = Function {
            id: 1,
            name: StringOffset::new(5),
            system_name: StringOffset::new(5),
            filename: StringOffset::new(6),
            start_line: 400,
        };
        let mut buf = Vec::new();
        function.encode(&mut buf);
        assert_eq!(
            &[0x08, 0x01, 0x10, 0x05, 0x18, 0x05, 0x20, 0x06, 0x28, 0x90, 0x03],
            buf.as_slice()
        );
    }

    #[test]
    fn roundtrip() {
        bolero::check!().with_type::<Function>().for_each(|function| {
            let mut buf = Vec::new();
            function.encode(&mut buf);
            let decoded = prost_impls::Function::decode(buf.as_slice()).unwrap();
            assert_eq!(prost_impls::Function::from(function), decoded);
        });
    }
}
