//! Annotator backed by an external command.
//!
//! The prompt for each release is written to the command's stdin and its
//! stdout is read as the reply. Any local model runner or API wrapper that
//! speaks stdin/stdout can sit behind it.

use anyhow::{bail, Context};
use std::io::Write;
use std::process::{Command, Stdio};

use relmatch_core::traits::Annotator;
use relmatch_core::types::{Annotation, ReleaseItem};
use relmatch_engine::augment::{build_prompt, parse_annotations};

pub struct CommandAnnotator {
    program: String,
    args: Vec<String>,
}

impl CommandAnnotator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }
}

impl Annotator for CommandAnnotator {
    fn annotate(&self, release: &ReleaseItem, resource_types: &[String]) -> anyhow::Result<Vec<Annotation>> {
        let prompt = build_prompt(release, resource_types);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("starting annotator '{}'", self.program))?;
        {
            let mut stdin = child.stdin.take().context("annotator stdin unavailable")?;
            stdin.write_all(prompt.as_bytes()).context("writing prompt to annotator")?;
        }
        let output = child.wait_with_output().context("waiting for annotator")?;
        if !output.status.success() {
            bail!("annotator '{}' exited with {}", self.program, output.status);
        }
        let reply = String::from_utf8_lossy(&output.stdout);
        let annotations = parse_annotations(&release.id, &reply);
        tracing::debug!(release = %release.id, annotations = annotations.len(), "annotator replied");
        Ok(annotations)
    }
}
