//! Line-oriented local host for the contract.
//!
//! Reads one JSON invocation per line and writes one JSON response per line.
//! A line that does not parse produces a failure response and processing
//! continues with the next line.
//!
//! ```text
//! > {"function": "invoke", "args": ["query", "X1"]}
//! < {"status":"success","payload":"{\"uuid\":\"X1\",...}"}
//! ```

use std::io::{self, BufRead, Write};

use assettrack_core::operation::Function;
use assettrack_ledger::LedgerStore;
use serde::{Deserialize, Serialize};

use crate::contract::AssetTrackingContract;
use crate::invocation::Invocation;
use crate::response::Response;

/// One input line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationLine {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Host-assigned id; a random one is generated when absent.
    #[serde(default)]
    pub tx_id: Option<String>,
}

/// One output line. Payload bytes are rendered as UTF-8 text.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseLine {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<String>,
    },
    Failure {
        message: String,
    },
}

impl From<&Response> for ResponseLine {
    fn from(response: &Response) -> Self {
        match response {
            Response::Success(payload) => ResponseLine::Success {
                payload: payload
                    .as_deref()
                    .map(|b| String::from_utf8_lossy(b).into_owned()),
            },
            Response::Failure(message) => ResponseLine::Failure {
                message: message.clone(),
            },
        }
    }
}

/// Counts reported once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Route one invocation to the matching contract entry point.
pub fn execute(
    contract: &AssetTrackingContract,
    store: &mut impl LedgerStore,
    invocation: &Invocation,
) -> Response {
    match Function::parse(&invocation.function) {
        Function::Init => contract.init(store),
        Function::Invoke | Function::Unknown(_) => contract.invoke(store, invocation),
    }
}

/// Process every line of `input`, writing responses to `output`.
///
/// Only IO errors abort the run.
pub fn run(
    contract: &AssetTrackingContract,
    store: &mut impl LedgerStore,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<InvocationLine>(&line) {
            Ok(parsed) => {
                let mut invocation = Invocation::new(parsed.function, parsed.args);
                if let Some(tx_id) = parsed.tx_id {
                    invocation = invocation.with_tx_id(tx_id);
                }
                execute(contract, store, &invocation)
            }
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "Malformed invocation line");
                Response::Failure(format!("Malformed invocation on line {}: {e}", index + 1))
            }
        };

        if response.is_success() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }

        serde_json::to_writer(&mut output, &ResponseLine::from(&response))?;
        output.write_all(b"\n")?;
    }

    output.flush()?;
    Ok(summary)
}
