//! Textual board encoding: `"<rows>|<cols>|<code_0>|...|<code_n>"`.

use sokoban_core::{CellIndex, Element, MalformedBoard, Terrain};
use sokoban_space::Grid;

use crate::error::BoardError;

/// Where the agent and boxes start.
///
/// Box order is the row-major scan order of the source encoding and
/// assigns box identities: the box at `boxes[i]` is `BoxId(i)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialPlacement {
    /// Starting agent cell.
    pub agent: CellIndex,
    /// Starting box cells, in identity order.
    pub boxes: Vec<CellIndex>,
}

/// The result of parsing a board encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedBoard {
    /// Board geometry.
    pub grid: Grid,
    /// Static terrain per cell, with agent and boxes lifted off.
    pub terrain: Vec<Terrain>,
    /// Initial agent and box cells.
    pub initial: InitialPlacement,
}

/// Parse a `|`-separated board encoding.
///
/// The first two tokens are `rows` and `cols`; the remaining
/// `rows * cols` tokens are [`Element`] codes in row-major order. Tokens
/// may carry surrounding whitespace and leading zeros, and a single
/// leading or trailing `|` is ignored.
///
/// # Examples
///
/// ```
/// use sokoban_board::parse_board;
/// use sokoban_core::{CellIndex, Terrain};
///
/// let parsed = parse_board("2|3|1|1|1|0|2|3").unwrap();
/// assert_eq!(parsed.initial.agent, CellIndex(3));
/// assert_eq!(parsed.initial.boxes, vec![CellIndex(4)]);
/// assert_eq!(parsed.terrain[5], Terrain::Goal);
/// ```
pub fn parse_board(encoding: &str) -> Result<ParsedBoard, BoardError> {
    let body = encoding.trim();
    let body = body.strip_prefix('|').unwrap_or(body);
    let body = body.strip_suffix('|').unwrap_or(body);
    let tokens: Vec<&str> = body.split('|').map(str::trim).collect();

    if tokens.len() < 2 {
        return Err(MalformedBoard::TokenCount {
            expected: 2,
            found: tokens.len(),
        }
        .into());
    }
    let rows = parse_dimension("rows", tokens[0])?;
    let cols = parse_dimension("cols", tokens[1])?;
    let grid = Grid::new(rows, cols).map_err(|_| MalformedBoard::GridTooLarge { rows, cols })?;

    let expected = grid.cell_count() + 2;
    if tokens.len() != expected {
        return Err(MalformedBoard::TokenCount {
            expected,
            found: tokens.len(),
        }
        .into());
    }

    let mut terrain = Vec::with_capacity(grid.cell_count());
    let mut agents = Vec::new();
    let mut boxes = Vec::new();
    let mut goals = 0usize;
    for (i, token) in tokens[2..].iter().enumerate() {
        let element = token
            .parse::<u8>()
            .ok()
            .and_then(Element::from_code)
            .ok_or_else(|| MalformedBoard::InvalidCode {
                cell: i,
                token: (*token).to_string(),
            })?;
        let cell = CellIndex(i as u32);
        if element.has_agent() {
            agents.push(cell);
        }
        if element.has_box() {
            boxes.push(cell);
        }
        if element.has_goal() {
            goals += 1;
        }
        terrain.push(element.terrain());
    }

    let agent = match agents.as_slice() {
        [agent] => *agent,
        _ => {
            return Err(MalformedBoard::AgentCount {
                found: agents.len(),
            }
            .into())
        }
    };
    if boxes.len() != goals {
        return Err(MalformedBoard::BoxGoalMismatch {
            boxes: boxes.len(),
            goals,
        }
        .into());
    }

    Ok(ParsedBoard {
        grid,
        terrain,
        initial: InitialPlacement { agent, boxes },
    })
}

fn parse_dimension(name: &'static str, token: &str) -> Result<u32, MalformedBoard> {
    match token.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(MalformedBoard::InvalidDimension {
            name,
            token: token.to_string(),
        }),
    }
}
