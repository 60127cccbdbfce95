use std::io::BufRead;

use bnb_encodings::Graph;
use log::debug;

use super::for_each_data_line;
use super::InstanceParseError;

/// Reads a graph given as `p <kind> <vertices> <edges>` followed by `e <u> <v> [weight]` lines
/// with 1-based endpoints; the weight defaults to 1.
pub(crate) fn parse_graph(source: impl BufRead) -> Result<Graph, InstanceParseError> {
    let mut graph: Option<Graph> = None;
    let mut expected_edges = 0;

    for_each_data_line(source, |line| {
        match line.tag {
            "p" => {
                if graph.is_some() {
                    return Err(InstanceParseError::DuplicateHeader { line: line.number });
                }
                if line.fields.len() != 3 {
                    return Err(line.invalid_header());
                }
                let num_vertices = line.required_field::<usize>(1)?;
                expected_edges = line.required_field::<usize>(2)?;
                graph = Some(Graph::new(num_vertices));
            }
            "e" => {
                let graph = graph.as_mut().ok_or(InstanceParseError::MissingHeader('p'))?;
                let u = line.required_field::<usize>(0)?;
                let v = line.required_field::<usize>(1)?;
                let weight = line.field::<f64>(2)?.unwrap_or(1.0);
                if u == 0 || v == 0 || line.fields.len() > 3 {
                    return Err(line.unexpected());
                }

                graph
                    .add_edge(u - 1, v - 1, weight)
                    .map_err(|source| InstanceParseError::Encoding {
                        line: line.number,
                        source,
                    })?;
            }
            _ => return Err(line.unexpected()),
        }

        Ok(())
    })?;

    let graph = graph.ok_or(InstanceParseError::MissingHeader('p'))?;
    if graph.num_edges() != expected_edges {
        return Err(InstanceParseError::IncorrectEdgeCount {
            expected: expected_edges,
            parsed: graph.num_edges(),
        });
    }

    debug!(
        "Parsed a graph with {} vertices and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}
