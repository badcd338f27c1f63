//! Predicate (WHERE clause) assembly.

use super::contains::encode_containment;
use crate::error::{BuildError, BuildResult};
use crate::param::{Param, ParamList};
use crate::spec::{Field, Op};

/// Walk state for one predicate build.
///
/// Placeholder numbering is a single counter shared across the walk so the
/// clause can be seeded past placeholders an enclosing statement already
/// consumed. Group depth is an explicit counter so unmatched opens can be
/// force-closed after the last field.
struct PredicateAssembler {
    sql: String,
    args: ParamList,
    next_param: usize,
    open_groups: usize,
}

/// Build the WHERE clause for an ordered filter sequence, numbering
/// placeholders from `$1`.
///
/// Empty `filters` produce empty text and an empty argument list; the caller
/// omits the clause entirely. Non-empty output carries the `WHERE` prefix.
pub fn build_where(filters: &[Field]) -> BuildResult<(String, ParamList)> {
    build_where_with_sequence(filters, 1)
}

/// Build the WHERE clause with placeholder numbering seeded at `start`.
///
/// Use this to splice the predicate after a base statement that has already
/// consumed `start - 1` placeholders.
pub fn build_where_with_sequence(
    filters: &[Field],
    start: usize,
) -> BuildResult<(String, ParamList)> {
    if filters.is_empty() {
        return Ok((String::new(), ParamList::new()));
    }

    let mut asm = PredicateAssembler {
        sql: String::from("WHERE"),
        args: ParamList::new(),
        next_param: start,
        open_groups: 0,
    };

    let last = filters.len() - 1;
    for (idx, field) in filters.iter().enumerate() {
        asm.emit_field(field, idx == last)?;
    }

    Ok((asm.sql, asm.args))
}

impl PredicateAssembler {
    fn emit_field(&mut self, field: &Field, is_last: bool) -> BuildResult<()> {
        let norm = field.normalize();

        if norm.group_open {
            self.open_groups += 1;
        }

        match norm.op {
            Op::In | Op::NotIn => {
                let encoded = encode_containment(&norm.name, norm.op, field.list.as_ref());
                self.sql.push(' ');
                self.sql.push_str(&encoded);
            }
            Op::IsNull | Op::IsNotNull => {
                self.sql.push_str(&format!(" {} {}", norm.name, norm.op));
            }
            Op::Between => {
                let (from, to) = field_bounds(field)?;
                self.sql.push_str(&format!(
                    " {} BETWEEN ${} AND ${}",
                    norm.name,
                    self.next_param,
                    self.next_param + 1
                ));
                self.args.push(from);
                self.args.push(to);
                self.next_param += 2;
            }
            // A parenthesis marker emits its own text, nothing else.
            Op::Paren => self.sql.push_str(&norm.name),
            _ => {
                if let Some(target) = &norm.target {
                    self.sql
                        .push_str(&format!(" {} {} {}", norm.name, norm.op, target));
                } else {
                    let value = field
                        .value
                        .clone()
                        .ok_or_else(|| BuildError::missing_value(&field.name))?;
                    self.sql
                        .push_str(&format!(" {} {} ${}", norm.name, norm.op, self.next_param));
                    self.args.push(value);
                    self.next_param += 1;
                }
            }
        }

        if self.open_groups > 0 && norm.group_close {
            self.open_groups -= 1;
            self.sql.push(')');
        }

        // Any group still open after the last field is force-closed.
        if self.open_groups > 0 && is_last {
            self.sql.push_str(&")".repeat(self.open_groups));
            self.open_groups = 0;
        }

        // Chaining separator between fields; a bare parenthesis never takes one.
        if !is_last && norm.op != Op::Paren {
            self.sql.push(' ');
            self.sql.push_str(norm.chain.as_sql());
        }

        Ok(())
    }
}

fn field_bounds(field: &Field) -> BuildResult<(Param, Param)> {
    match (&field.from_value, &field.to_value) {
        (Some(from), Some(to)) => Ok((from.clone(), to.clone())),
        _ => Err(BuildError::malformed_range(&field.name)),
    }
}
