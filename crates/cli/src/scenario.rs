//! TOML scenario files
//!
//! A scenario declares one container and a list of steps to run against it.
//! Only scalar, string and bigint kinds can be driven from a file; composite
//! kinds need host code to build their payloads.
//!
//! # Example
//!
//! ```toml
//! capacity = 4
//! kind = "decimal"
//!
//! [window]
//! top = 1
//! begin = 1
//! end = 4
//!
//! [[step]]
//! action = "push"
//! value = 555
//!
//! [[step]]
//! action = "print_stack"
//! ```
//!
//! Query steps (`pop`, `get`, `contains`, `stack_size`, `print_*`) write one
//! line each; mutating steps write nothing. The first failing step stops the
//! run.

use serde::Deserialize;
use slotstack_core::{BigInt, ContainerError, Kind, TaggedSlotContainer, Value};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Error while loading or running a scenario
#[derive(Debug)]
pub enum ScenarioError {
    /// Scenario file could not be read
    Io { path: PathBuf, source: io::Error },
    /// TOML syntax or shape error
    Parse(Box<toml::de::Error>),
    /// Well-formed TOML that does not describe a runnable scenario
    Invalid(String),
    /// A step was rejected by the container
    Step {
        step: usize,
        action: &'static str,
        source: ContainerError,
    },
    /// Output could not be written
    Output(io::Error),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ScenarioError::Parse(e) => write!(f, "failed to parse scenario: {}", e),
            ScenarioError::Invalid(msg) => write!(f, "invalid scenario: {}", msg),
            ScenarioError::Step {
                step,
                action,
                source,
            } => write!(f, "step {} ({}): {}", step, action, source),
            ScenarioError::Output(e) => write!(f, "cannot write output: {}", e),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io { source, .. } => Some(source),
            ScenarioError::Parse(e) => Some(e.as_ref()),
            ScenarioError::Step { source, .. } => Some(source),
            ScenarioError::Output(e) => Some(e),
            ScenarioError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(e: toml::de::Error) -> Self {
        ScenarioError::Parse(Box::new(e))
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        ScenarioError::Output(e)
    }
}

/// Largest integer magnitude an f64 holds without rounding (2^53)
const MAX_EXACT_REAL_INT: u64 = 1 << 53;

/// Scalar literal as written in TOML
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Literal {
    /// Convert to a value of `kind`, or explain why it cannot be one
    pub fn to_value(&self, kind: Kind) -> Result<Value, String> {
        match (kind, self) {
            (Kind::Decimal, Literal::Int(n)) => i32::try_from(*n)
                .map(Value::Decimal)
                .map_err(|_| format!("{} does not fit a 32-bit decimal", n)),
            (Kind::Real, Literal::Float(r)) => Ok(Value::Real(*r)),
            (Kind::Real, Literal::Int(n)) => {
                if n.unsigned_abs() <= MAX_EXACT_REAL_INT {
                    Ok(Value::Real(*n as f64))
                } else {
                    Err(format!("{} cannot be represented exactly as a real", n))
                }
            }
            (Kind::String, Literal::Text(s)) => Ok(Value::from(s.as_str())),
            (Kind::BigInt, Literal::Int(n)) => Ok(Value::from(BigInt::from(*n))),
            (Kind::BigInt, Literal::Text(s)) => s
                .parse::<BigInt>()
                .map(Value::from)
                .map_err(|e| format!("'{}' is not an integer: {}", s, e)),
            (kind, literal) => Err(format!("{:?} is not a {} value", literal, kind)),
        }
    }
}

/// Stack window as written in a scenario
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    pub top: usize,
    pub begin: usize,
    pub end: usize,
}

/// One scenario step
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Push { value: Literal },
    Pop,
    Set { index: usize, value: Literal },
    Get { index: usize },
    Delete { index: usize },
    Contains { value: Literal },
    Window { top: usize, begin: usize, end: usize },
    StackSize,
    PrintStack,
    PrintArray,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Push { .. } => "push",
            Step::Pop => "pop",
            Step::Set { .. } => "set",
            Step::Get { .. } => "get",
            Step::Delete { .. } => "delete",
            Step::Contains { .. } => "contains",
            Step::Window { .. } => "window",
            Step::StackSize => "stack_size",
            Step::PrintStack => "print_stack",
            Step::PrintArray => "print_array",
        }
    }

    fn literal(&self) -> Option<&Literal> {
        match self {
            Step::Push { value } | Step::Set { value, .. } | Step::Contains { value } => {
                Some(value)
            }
            _ => None,
        }
    }
}

/// Top-level scenario structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub capacity: usize,
    pub kind: String,
    #[serde(default)]
    pub window: Option<WindowSpec>,
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parse a scenario from TOML content
    ///
    /// Validates the scenario after parsing to catch:
    /// - Unknown or composite kinds
    /// - Literals that cannot become values of the declared kind
    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded scenario");
        Self::parse(&content)
    }

    /// Declared element kind
    pub fn kind(&self) -> Result<Kind, ScenarioError> {
        self.kind
            .parse::<Kind>()
            .map_err(|e| ScenarioError::Invalid(e.to_string()))
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        let kind = self.kind()?;
        match kind {
            Kind::Decimal | Kind::Real | Kind::String | Kind::BigInt => {}
            other => {
                return Err(ScenarioError::Invalid(format!(
                    "{} containers cannot be built from a scenario file",
                    other
                )));
            }
        }
        for (idx, step) in self.steps.iter().enumerate() {
            if let Some(literal) = step.literal() {
                literal.to_value(kind).map_err(|msg| {
                    ScenarioError::Invalid(format!("step {} ({}): {}", idx + 1, step.name(), msg))
                })?;
            }
        }
        Ok(())
    }

    /// Build the container and run every step, writing query results to `out`.
    ///
    /// Returns the container in its final state.
    pub fn run(&self, out: &mut impl Write) -> Result<TaggedSlotContainer, ScenarioError> {
        let kind = self.kind()?;
        let mut container = TaggedSlotContainer::new(self.capacity, kind);
        if let Some(w) = self.window {
            container
                .configure_window(w.top, w.begin, w.end)
                .map_err(|source| ScenarioError::Step {
                    step: 0,
                    action: "window",
                    source,
                })?;
        }
        info!(capacity = self.capacity, %kind, steps = self.steps.len(), "running scenario");

        for (idx, step) in self.steps.iter().enumerate() {
            let fail = |source: ContainerError| ScenarioError::Step {
                step: idx + 1,
                action: step.name(),
                source,
            };
            self.apply(&mut container, kind, step, out)?
                .map_err(fail)?;
        }
        Ok(container)
    }

    /// Outer result: output failure. Inner result: container rejected the step.
    fn apply(
        &self,
        container: &mut TaggedSlotContainer,
        kind: Kind,
        step: &Step,
        out: &mut impl Write,
    ) -> Result<Result<(), ContainerError>, ScenarioError> {
        let value = |literal: &Literal| {
            literal
                .to_value(kind)
                .map_err(|msg| ScenarioError::Invalid(format!("{}: {}", step.name(), msg)))
        };
        let outcome = match step {
            Step::Push { value: literal } => container.push(value(literal)?),
            Step::Set {
                index,
                value: literal,
            } => container.set(*index, value(literal)?),
            Step::Delete { index } => container.delete(*index),
            Step::Window { top, begin, end } => container.configure_window(*top, *begin, *end),
            Step::Pop => match container.pop() {
                Ok(v) => {
                    writeln!(out, "{}", v.to_rendered())?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Step::Get { index } => match container.get(*index) {
                Ok(Some(v)) => {
                    writeln!(out, "{}", v.to_rendered())?;
                    Ok(())
                }
                Ok(None) => {
                    writeln!(out, "absent")?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Step::Contains { value: literal } => match container.contains(value(literal)?) {
                Ok(Some(index)) => {
                    writeln!(out, "{}", index)?;
                    Ok(())
                }
                Ok(None) => {
                    writeln!(out, "not found")?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Step::StackSize => {
                writeln!(out, "{}", container.stack_size())?;
                Ok(())
            }
            Step::PrintStack => {
                writeln!(out, "{}", container.render_stack())?;
                Ok(())
            }
            Step::PrintArray => {
                writeln!(out, "{}", container.render_array())?;
                Ok(())
            }
        };
        Ok(outcome)
    }
}
