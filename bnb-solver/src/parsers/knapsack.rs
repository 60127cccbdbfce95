use std::io::BufRead;

use bnb_encodings::KnapsackInstance;
use bnb_encodings::KnapsackItem;
use log::debug;

use super::for_each_data_line;
use super::InstanceParseError;

/// Reads a knapsack given as a `k <capacity>` line and `i <value> <weight>` lines.
pub(crate) fn parse_knapsack(source: impl BufRead) -> Result<KnapsackInstance, InstanceParseError> {
    let mut capacity: Option<(usize, f64)> = None;
    let mut items = Vec::new();

    for_each_data_line(source, |line| {
        match line.tag {
            "k" => {
                if capacity.is_some() {
                    return Err(InstanceParseError::DuplicateHeader { line: line.number });
                }
                if line.fields.len() != 1 {
                    return Err(line.invalid_header());
                }
                capacity = Some((line.number, line.required_field(0)?));
            }
            "i" => {
                if line.fields.len() != 2 {
                    return Err(line.unexpected());
                }
                items.push(KnapsackItem {
                    value: line.required_field(0)?,
                    weight: line.required_field(1)?,
                });
            }
            _ => return Err(line.unexpected()),
        }

        Ok(())
    })?;

    let (line, capacity) = capacity.ok_or(InstanceParseError::MissingHeader('k'))?;
    debug!("Parsed a knapsack with {} items", items.len());

    KnapsackInstance::new(capacity, items)
        .map_err(|source| InstanceParseError::Encoding { line, source })
}
