//! Console session engine
//!
//! A [`Session`] owns the registry, the console transcript, and the most
//! recent layout result. It is the seam between the text front end and the
//! core: input lines are parsed into commands, validated (field-name
//! existence lives here, not in the registry), dispatched, and their results
//! appended to the transcript as styled lines.
//!
//! The TUI renders the transcript and layout verbatim; a script file is fed
//! through the same `run_line` path as interactive input, so both produce
//! identical output.

use crate::layout::{layout_heuristic, layout_packed, layout_unpacked, LayoutReport, Strategy};
use crate::parser::{parse_line, Command};
use crate::registry::{Registry, RegistryError};

/// Styling class of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command.
    Input,
    /// Normal command output.
    Output,
    /// Parse or registry error.
    Error,
}

/// One line of console transcript.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
}

/// The most recent layout computation, kept for the diagram pane.
#[derive(Debug, Clone)]
pub struct LayoutView {
    pub type_name: String,
    pub strategy: Strategy,
    pub report: LayoutReport,
}

/// Whether the caller should keep the session alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Interactive session state: registry + word size + transcript + last layout.
pub struct Session {
    registry: Registry,
    word_size: usize,
    transcript: Vec<ConsoleLine>,
    last_layout: Option<LayoutView>,
}

impl Session {
    /// Create a session seeded with the built-in atomics and a 4-byte word.
    pub fn new() -> Self {
        let mut session = Session {
            registry: Registry::with_builtins(),
            word_size: 4,
            transcript: Vec::new(),
            last_layout: None,
        };
        session.out("structty - interactive type layout explorer");
        session.out("Type 'help' for the command list.");
        session
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Diagram grouping width in bytes. Cosmetic only - placement never
    /// consults it.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    pub fn transcript(&self) -> &[ConsoleLine] {
        &self.transcript
    }

    pub fn last_layout(&self) -> Option<&LayoutView> {
        self.last_layout.as_ref()
    }

    /// Parse and execute one input line, echoing it into the transcript.
    pub fn run_line(&mut self, line_no: usize, input: &str) -> Outcome {
        if !input.trim().is_empty() {
            self.push(LineKind::Input, format!("> {}", input.trim()));
        }

        match parse_line(line_no, input) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Outcome::Continue,
            Err(e) => {
                self.err(e.to_string());
                Outcome::Continue
            }
        }
    }

    /// Run every line of a script through the normal input path. Errors are
    /// reported with their line numbers and do not abort the remaining lines.
    pub fn preload_script(&mut self, source: &str) -> Outcome {
        for (index, line) in source.lines().enumerate() {
            if self.run_line(index + 1, line) == Outcome::Quit {
                return Outcome::Quit;
            }
        }
        Outcome::Continue
    }

    /// Dispatch a parsed command against the registry.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Atomic { name, size, align } => {
                match self.registry.insert_atomic(&name, size, align) {
                    Ok(()) => self.out(format!(
                        "Registered atomic '{}' (size {}, align {})",
                        name, size, align
                    )),
                    Err(e) => self.err(e.to_string()),
                }
            }
            Command::Struct { name, fields } => {
                if self.fields_exist(&name, &fields) {
                    match self.registry.insert_struct(&name, fields) {
                        Ok(()) => self.report_registered(&name),
                        Err(e) => self.err(e.to_string()),
                    }
                }
            }
            Command::Union { name, fields } => {
                if self.fields_exist(&name, &fields) {
                    match self.registry.insert_union(&name, fields) {
                        Ok(()) => self.report_registered(&name),
                        Err(e) => self.err(e.to_string()),
                    }
                }
            }
            Command::Show { name } => self.show(&name),
            Command::Types => self.list_types(),
            Command::Layout { name } => self.compute_layout(&name, Strategy::Unpacked),
            Command::Packed { name } => self.compute_layout(&name, Strategy::Packed),
            Command::Heuristic { name } => self.compute_layout(&name, Strategy::Heuristic),
            Command::WordSize { size } => {
                if size <= 0 {
                    self.err(format!("Word size must be positive, got {}", size));
                } else {
                    self.word_size = size as usize;
                    self.out(format!("Word size set to {} bytes", size));
                }
            }
            Command::Help => self.print_help(),
            Command::Clear => self.transcript.clear(),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue
    }

    // ===== Command handlers =====

    /// The registry assumes field names exist; this is the validation that
    /// upholds that precondition for console input. A field matching the
    /// declared name is skipped here so the registry's own self-reference
    /// check gets to report it.
    fn fields_exist(&mut self, name: &str, fields: &[String]) -> bool {
        for field in fields {
            if field == name {
                continue;
            }
            if !self.registry.contains(field) {
                let e = RegistryError::UnknownType {
                    name: field.clone(),
                };
                self.err(e.to_string());
                return false;
            }
        }
        true
    }

    fn report_registered(&mut self, name: &str) {
        // Just inserted, so the lookup cannot fail; still avoid unwrapping.
        let registered = match self.registry.lookup(name) {
            Ok(entry) => (entry.kind(), entry.size(), entry.align()),
            Err(_) => return,
        };
        self.out(format!(
            "Registered {} '{}' (size {}, align {})",
            registered.0.label().to_ascii_lowercase(),
            name,
            registered.1,
            registered.2
        ));
    }

    fn show(&mut self, name: &str) {
        let entry = match self.registry.lookup(name) {
            Ok(entry) => entry.clone(),
            Err(e) => {
                self.err(e.to_string());
                return;
            }
        };

        self.out(format!(
            "{}: {}, size {}, align {}",
            entry.name(),
            entry.kind().label(),
            entry.size(),
            entry.align()
        ));

        if !entry.fields().is_empty() {
            self.out(format!("  fields: {}", entry.fields().join(" ")));
        }
        if entry.is_struct() {
            let sorted = crate::layout::resolve::sort_by_alignment(&self.registry, entry.fields());
            self.out(format!("  by alignment: {}", sorted.join(" ")));
        } else {
            // Atomics and unions have exactly one diagram: a single block.
            // Mirror it into the layout pane; structs keep whatever strategy
            // was last requested.
            self.last_layout = Some(LayoutView {
                type_name: entry.name().to_string(),
                strategy: Strategy::Unpacked,
                report: layout_unpacked(&self.registry, &entry),
            });
        }
    }

    fn list_types(&mut self) {
        if self.registry.is_empty() {
            self.out("(no types registered)");
            return;
        }

        let lines: Vec<String> = self
            .registry
            .names()
            .iter()
            .filter_map(|name| self.registry.get(name))
            .map(|entry| {
                format!(
                    "  {}: {}, size {}, align {}",
                    entry.name(),
                    entry.kind().label(),
                    entry.size(),
                    entry.align()
                )
            })
            .collect();

        self.out(format!("{} registered types:", self.registry.len()));
        for line in lines {
            self.out(line);
        }
    }

    fn compute_layout(&mut self, name: &str, strategy: Strategy) {
        let entry = match self.registry.lookup(name) {
            Ok(entry) => entry.clone(),
            Err(e) => {
                self.err(e.to_string());
                return;
            }
        };

        let report = match strategy {
            Strategy::Unpacked => layout_unpacked(&self.registry, &entry),
            Strategy::Packed => layout_packed(&self.registry, &entry),
            Strategy::Heuristic => match entry.as_struct() {
                Some(target) => layout_heuristic(&self.registry, target),
                None => {
                    self.err(format!(
                        "Heuristic layout needs a struct; '{}' is {}",
                        name,
                        entry.kind().label().to_ascii_lowercase()
                    ));
                    return;
                }
            },
        };

        self.out(format!(
            "{} layout of '{}': {} bytes allocated, {} used, {} lost",
            strategy, name, report.total, report.used, report.wasted
        ));
        self.last_layout = Some(LayoutView {
            type_name: name.to_string(),
            strategy,
            report,
        });
    }

    fn print_help(&mut self) {
        for line in [
            "Commands:",
            "  atomic <name> <size> <align>   register a primitive type",
            "  struct <name> <field>...       register a struct (fields in order)",
            "  union <name> <field>...        register a union",
            "  show <name>                    size, alignment, and fields of a type",
            "  types                          list every registered type",
            "  layout <name>                  diagram: natural alignment with padding",
            "  packed <name>                  diagram: no padding at all",
            "  heuristic <name>               diagram: sorted best-fit placement",
            "  wordsize <n>                   set the diagram's word grouping",
            "  clear                          wipe the console",
            "  quit                           leave",
        ] {
            self.out(line);
        }
    }

    // ===== Transcript =====

    fn push(&mut self, kind: LineKind, text: String) {
        self.transcript.push(ConsoleLine { kind, text });
    }

    fn out(&mut self, text: impl Into<String>) {
        self.push(LineKind::Output, text.into());
    }

    fn err(&mut self, text: impl Into<String>) {
        self.push(LineKind::Error, text.into());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
