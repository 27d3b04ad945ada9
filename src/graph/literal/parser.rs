use crate::{Error, Result};

/// One comma-separated item of literal graph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Item<'a> {
    Node(&'a str),
    Relation { from: &'a str, to: &'a str, cost: i64 },
}

pub(super) fn parse(text: &str) -> Result<Vec<Item<'_>>> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }
    text.split(',').map(parse_item).collect()
}

fn parse_item(item: &str) -> Result<Item<'_>> {
    let parts: Vec<_> = item.split('>').map(str::trim).collect();
    match parts.as_slice() {
        [name] => Ok(Item::Node(parse_name(*name)?)),
        [from, to] => Ok(Item::Relation {
            from: parse_name(*from)?,
            to: parse_name(*to)?,
            cost: 1,
        }),
        [from, cost, to] => {
            let cost = cost
                .parse::<i64>()
                .ok()
                .filter(|c| *c >= 0)
                .ok_or_else(|| {
                    Error::InvalidArgument(format!("invalid cost {:?} in {:?}", cost, item.trim()))
                })?;
            Ok(Item::Relation {
                from: parse_name(*from)?,
                to: parse_name(*to)?,
                cost,
            })
        }
        _ => Err(Error::InvalidArgument(format!(
            "too many '>' in {:?}",
            item.trim()
        ))),
    }
}

fn parse_name(name: &str) -> Result<&str> {
    if !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        Ok(name)
    } else {
        Err(Error::InvalidArgument(format!("invalid node name {:?}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items() {
        let trial = parse(" A > B ,B>3>C_1,D").unwrap();
        assert_eq!(
            trial,
            vec![
                Item::Relation {
                    from: "A",
                    to: "B",
                    cost: 1
                },
                Item::Relation {
                    from: "B",
                    to: "C_1",
                    cost: 3
                },
                Item::Node("D"),
            ]
        );
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn malformed() {
        for text in ["A>", "A>>B", "A>x>B", "A>1>2>B", "A>-3>B", "A,,B", "A B", "A>B,"] {
            assert!(
                matches!(parse(text), Err(Error::InvalidArgument(_))),
                "{:?}",
                text
            );
        }
    }
}
