//! Recursive structural equality over [`Value`] trees.

use contesta_stack::{DepthExceeded, DepthLimit};
use contesta_value::{ListValue, MapValue, OptionValue, StructValue, Value};

/// Full structural equality of two values of the same type.
///
/// Sequences compare in order, maps by key set (insertion order is ignored),
/// records field by field. Byte buffers compare by content, so a nil buffer
/// equals an empty one. A nil list or map is not equal to an empty one.
///
/// Nesting deeper than `limit` fails with [`DepthExceeded`].
pub fn deep_equal(a: &Value, b: &Value, limit: DepthLimit) -> Result<bool, DepthExceeded> {
    Walker { limit }.equal(a, b, 0)
}

/// Field-wise equality of two records, ignoring their names.
pub(crate) fn fields_equal(
    a: &StructValue,
    b: &StructValue,
    limit: DepthLimit,
) -> Result<bool, DepthExceeded> {
    Walker { limit }.fields(a, b, 0)
}

#[derive(Copy, Clone)]
struct Walker {
    limit: DepthLimit,
}

impl Walker {
    fn equal(self, a: &Value, b: &Value, depth: usize) -> Result<bool, DepthExceeded> {
        self.limit.descend(depth, || self.equal_inner(a, b, depth + 1))?
    }

    #[allow(clippy::float_cmp)]
    fn equal_inner(self, a: &Value, b: &Value, depth: usize) -> Result<bool, DepthExceeded> {
        let equal = match (a, b) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Char(x), Value::Char(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::Str(x), Value::Str(y)) => x == y,
            (Value::Bytes(x), Value::Bytes(y)) => {
                x.as_deref().unwrap_or_default() == y.as_deref().unwrap_or_default()
            }
            (Value::List(x), Value::List(y)) => return self.lists(x, y, depth),
            (Value::Map(x), Value::Map(y)) => return self.maps(x, y, depth),
            (Value::Option(x), Value::Option(y)) => return self.options(x, y, depth),
            (Value::Struct(x), Value::Struct(y)) => {
                return Ok(x.name == y.name && self.fields(x, y, depth)?);
            }
            _ => false,
        };
        Ok(equal)
    }

    fn lists(self, a: &ListValue, b: &ListValue, depth: usize) -> Result<bool, DepthExceeded> {
        if a.elem != b.elem {
            return Ok(false);
        }
        match (&a.items, &b.items) {
            (None, None) => Ok(true),
            (Some(x), Some(y)) if x.len() == y.len() => {
                for (x, y) in x.iter().zip(y) {
                    if !self.equal(x, y, depth)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn maps(self, a: &MapValue, b: &MapValue, depth: usize) -> Result<bool, DepthExceeded> {
        if a.key != b.key || a.value != b.value {
            return Ok(false);
        }
        match (&a.entries, &b.entries) {
            (None, None) => Ok(true),
            (Some(x), Some(y)) if x.len() == y.len() => {
                for (key, value) in x {
                    let Some(other) = self.lookup(y, key, depth)? else {
                        return Ok(false);
                    };
                    if !self.equal(value, other, depth)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn lookup<'v>(
        self,
        entries: &'v [(Value, Value)],
        key: &Value,
        depth: usize,
    ) -> Result<Option<&'v Value>, DepthExceeded> {
        for (candidate, value) in entries {
            if self.equal(candidate, key, depth)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn options(
        self,
        a: &OptionValue,
        b: &OptionValue,
        depth: usize,
    ) -> Result<bool, DepthExceeded> {
        if a.inner_ty != b.inner_ty {
            return Ok(false);
        }
        match (&a.inner, &b.inner) {
            (None, None) => Ok(true),
            (Some(x), Some(y)) => self.equal(x, y, depth),
            _ => Ok(false),
        }
    }

    fn fields(self, a: &StructValue, b: &StructValue, depth: usize) -> Result<bool, DepthExceeded> {
        if a.fields.len() != b.fields.len() {
            return Ok(false);
        }
        for ((a_name, a_value), (b_name, b_value)) in a.fields.iter().zip(&b.fields) {
            if a_name != b_name || !self.equal(a_value, b_value, depth)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Look up `key` in a map's entries by structural equality.
pub(crate) fn map_get<'v>(
    map: &'v MapValue,
    key: &Value,
    limit: DepthLimit,
) -> Result<Option<&'v Value>, DepthExceeded> {
    Walker { limit }.lookup(map.entries(), key, 0)
}
