// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim shell` command: an interactive session on stdin.
//!
//! Each line is one command. Bad input (unparseable or non-positive
//! sizes, unknown jobs, deallocating a job that is not allocated) is
//! reported and the shell keeps going with its state untouched.

use super::{write_json_line, write_report, write_state};
use anyhow::{anyhow, bail};
use memory_model::{JobId, JobStatus, MemorySize};
use placement_strategy::StrategyKind;
use serde::Serialize;
use serde_json::json;
use simulator::Allocator;
use std::fmt;
use std::io::{BufRead, Write};

const HELP: &str = "\
  partition <size>       add a partition (e.g. 100, 100K, 1M)
  job <size>             add a waiting job
  strategy <name>        select first-fit, best-fit, worst-fit, or next-fit
  allocate [strategy]    place waiting jobs (uses the selected strategy)
  deallocate <job>       free the partition held by a job (e.g. J2)
  allocated              list jobs that can be deallocated
  show                   print partitions, jobs, and memory usage
  stats                  print session counters
  reset                  clear everything
  help                   show this text
  quit                   leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    AddPartition(MemorySize),
    AddJob(MemorySize),
    SelectStrategy(StrategyKind),
    Allocate(Option<StrategyKind>),
    Deallocate(JobId),
    Allocated,
    Show,
    Stats,
    Reset,
    Help,
    Quit,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_lowercase();
    let rest: Vec<&str> = words.collect();
    let arg = rest.join(" ");

    let (verb_str, arg_str) = (verb.as_str(), arg.as_str());
    let required = move |what: &str| required_arg(verb_str, arg_str, what);

    let cmd = match verb.as_str() {
        "partition" | "p" => ShellCommand::AddPartition(MemorySize::parse(required("a size")?)?),
        "job" | "j" => ShellCommand::AddJob(MemorySize::parse(required("a size")?)?),
        "strategy" | "s" => ShellCommand::SelectStrategy(required("a strategy name")?.parse()?),
        "allocate" | "a" => {
            if arg.is_empty() {
                ShellCommand::Allocate(None)
            } else {
                ShellCommand::Allocate(Some(arg.parse()?))
            }
        }
        "deallocate" | "d" => ShellCommand::Deallocate(JobId::parse(required("a job label")?)?),
        "allocated" => ShellCommand::Allocated,
        "show" | "ls" => ShellCommand::Show,
        "stats" => ShellCommand::Stats,
        "reset" => ShellCommand::Reset,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(anyhow!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(cmd))
}

fn required_arg<'a>(verb: &str, arg: &'a str, what: &str) -> anyhow::Result<&'a str> {
    if arg.is_empty() {
        bail!("'{verb}' needs {what}");
    }
    Ok(arg)
}

/// Interactive session state.
///
/// In JSON mode every reply, errors included, is one compact JSON object
/// per line and no prompt or banner is printed.
pub struct Shell {
    session: Allocator,
    strategy: StrategyKind,
    json: bool,
}

impl Shell {
    pub fn new(json: bool) -> Self {
        Self {
            session: Allocator::new(),
            strategy: StrategyKind::FirstFit,
            json,
        }
    }

    pub fn session(&self) -> &Allocator {
        &self.session
    }

    /// Applies one command. Returns `false` when the shell should exit.
    pub fn apply(&mut self, cmd: ShellCommand, out: &mut impl Write) -> anyhow::Result<bool> {
        match cmd {
            ShellCommand::AddPartition(size) => {
                let id = self.session.add_partition_sized(size);
                self.reply(
                    out,
                    &json!({ "partition": id, "size_kb": size.as_kb() }),
                    format_args!("added {id} ({size})"),
                )?;
            }
            ShellCommand::AddJob(size) => {
                let id = self.session.add_job_sized(size);
                self.reply(
                    out,
                    &json!({ "job": id, "size_kb": size.as_kb(), "status": JobStatus::Waiting }),
                    format_args!("added {id} ({size}), waiting"),
                )?;
            }
            ShellCommand::SelectStrategy(kind) => {
                self.strategy = kind;
                self.reply(
                    out,
                    &json!({ "strategy": kind }),
                    format_args!("strategy: {}", kind.display_name()),
                )?;
            }
            ShellCommand::Allocate(kind) => {
                let report = self.session.allocate(kind.unwrap_or(self.strategy));
                if self.json {
                    write_json_line(out, &report)?;
                } else {
                    write_report(out, &report)?;
                }
            }
            ShellCommand::Deallocate(job) => {
                let freed = self.session.deallocate(job)?;
                self.reply(
                    out,
                    &json!({ "job": job, "status": JobStatus::Finished, "freed": freed }),
                    format_args!("{job} finished, {freed} is free"),
                )?;
            }
            ShellCommand::Allocated => {
                let jobs: Vec<_> = self
                    .session
                    .allocated_jobs()
                    .map(|j| (j.id(), j.size(), j.partition()))
                    .collect();
                if self.json {
                    let rows: Vec<_> = jobs
                        .iter()
                        .map(|(id, size, partition)| {
                            json!({ "job": id, "size_kb": size.as_kb(), "partition": partition })
                        })
                        .collect();
                    write_json_line(out, &rows)?;
                } else if jobs.is_empty() {
                    writeln!(out, "  no allocated jobs")?;
                } else {
                    let labels: Vec<String> = jobs
                        .iter()
                        .map(|(id, size, _)| format!("{id} ({size})"))
                        .collect();
                    writeln!(out, "  {}", labels.join(", "))?;
                }
            }
            ShellCommand::Show => {
                if self.json {
                    write_json_line(out, &self.session.snapshot())?;
                } else {
                    write_state(out, &self.session)?;
                }
            }
            ShellCommand::Stats => {
                if self.json {
                    write_json_line(
                        out,
                        &json!({ "stats": self.session.stats(), "usage": self.session.usage() }),
                    )?;
                } else {
                    writeln!(out, "  {}", self.session.stats().summary())?;
                    writeln!(out, "  {}", self.session.usage().summary())?;
                }
            }
            ShellCommand::Reset => {
                self.session.reset();
                self.reply(out, &json!({ "reset": true }), format_args!("session cleared"))?;
            }
            ShellCommand::Help => {
                if self.json {
                    write_json_line(out, &json!({ "help": HELP }))?;
                } else {
                    writeln!(out, "{HELP}")?;
                }
            }
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Reads commands until EOF or `quit`, reporting errors inline.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        self.prompt(out)?;
        for line in input.lines() {
            let line = line?;
            let outcome = match parse_line(&line) {
                Ok(Some(cmd)) => self.apply(cmd, out),
                Ok(None) => Ok(true),
                Err(e) => Err(e),
            };
            let keep_going = match outcome {
                Ok(keep_going) => keep_going,
                Err(e) => {
                    tracing::debug!("command '{}' rejected: {e}", line.trim());
                    self.reply(out, &json!({ "error": e.to_string() }), format_args!("error: {e}"))?;
                    true
                }
            };
            if !keep_going {
                break;
            }
            self.prompt(out)?;
        }
        if !self.json {
            writeln!(out)?;
        }
        Ok(())
    }

    fn prompt(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.json {
            return Ok(());
        }
        write!(out, "fitsim> ")?;
        out.flush()
    }

    /// Writes `value` as a JSON line in JSON mode, otherwise the indented text.
    fn reply(
        &self,
        out: &mut impl Write,
        value: &impl Serialize,
        text: fmt::Arguments<'_>,
    ) -> anyhow::Result<()> {
        if self.json {
            write_json_line(out, value)
        } else {
            writeln!(out, "  {text}")?;
            Ok(())
        }
    }
}

pub fn execute(json: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !json {
        writeln!(out, "fitsim interactive shell. Type 'help' for commands.")?;
    }
    Shell::new(json).run(stdin.lock(), &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_model::{JobStatus, PartitionId};

    fn run_script(script: &str) -> (Shell, String) {
        let mut shell = Shell::new(false);
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("partition 100").unwrap(),
            Some(ShellCommand::AddPartition(MemorySize::from_kb(100).unwrap()))
        );
        assert_eq!(
            parse_line("  allocate Best Fit ").unwrap(),
            Some(ShellCommand::Allocate(Some(StrategyKind::BestFit)))
        );
        assert_eq!(parse_line("allocate").unwrap(), Some(ShellCommand::Allocate(None)));
        assert_eq!(
            parse_line("d J3").unwrap(),
            Some(ShellCommand::Deallocate(JobId::from_index(2)))
        );
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# comment").unwrap(), None);
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("job").is_err());
        assert!(parse_line("job -5").is_err());
        assert!(parse_line("job abc").is_err());
        assert!(parse_line("allocate buddy").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn test_scripted_session() {
        let (shell, text) = run_script(
            "partition 100\npartition 200\npartition 300\n\
             job 80\njob 150\njob 250\n\
             allocate\ndeallocate J2\njob 180\nallocate\nshow\nquit\n",
        );
        let s = shell.session();
        assert_eq!(s.job(JobId::from_index(1)).unwrap().status(), JobStatus::Finished);
        assert_eq!(
            s.job(JobId::from_index(3)).unwrap().partition(),
            Some(PartitionId::from_index(1))
        );
        assert!(text.contains("J2 finished, F2 is free"));
        assert!(text.contains("J4 (180 KB)"));
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let (shell, text) = run_script("job 0\njob x\npartition 50\njob 80\ndeallocate J1\nallocate\n");
        assert!(text.contains("invalid size"));
        assert!(text.contains("cannot parse size"));
        assert!(text.contains("not Allocated"));
        assert!(text.contains("still waiting"));
        assert_eq!(shell.session().jobs().len(), 1);
    }

    #[test]
    fn test_selected_strategy_is_used() {
        let (shell, _) = run_script("partition 300\npartition 100\nstrategy best\njob 90\nallocate\n");
        assert_eq!(
            shell.session().job(JobId::from_index(0)).unwrap().partition(),
            Some(PartitionId::from_index(1))
        );
    }

    #[test]
    fn test_reset_and_quit() {
        let (shell, text) = run_script("partition 100\njob 10\nreset\nquit\npartition 5\n");
        assert!(text.contains("session cleared"));
        // Nothing after quit is processed.
        assert!(shell.session().partitions().is_empty());
    }

    #[test]
    fn test_json_mode_is_line_delimited() {
        let mut shell = Shell::new(true);
        let mut out = Vec::new();
        shell
            .run(
                "partition 64\njob 32\njob 0\nallocate\nallocated\nstats\nshow\n".as_bytes(),
                &mut out,
            )
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("fitsim>"));
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values.len(), 7);
        assert_eq!(values[0]["size_kb"], 64);
        assert_eq!(values[1]["status"], "waiting");
        assert!(values[2]["error"].as_str().unwrap().contains("invalid size"));
        assert_eq!(values[4][0]["size_kb"], 32);
        assert_eq!(values[5]["stats"]["placements"], 1);
        assert_eq!(values[6]["partitions"][0]["size_kb"], 64);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_propagated() {
        let mut shell = Shell::new(true);
        let err = shell
            .run("deallocate J1\n".as_bytes(), &mut FailingWriter)
            .unwrap_err();
        assert!(err.to_string().contains("closed"));
    }
}
