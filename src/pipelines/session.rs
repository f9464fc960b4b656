use super::url::Importer;
use super::ImportReport;
use crate::config::FetchFailurePolicy;
use crate::error::ImportError;
use std::io::Write;

/// One line read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Url(String),
    Exit,
}

impl Input {
    /// `None` for blank lines; `exit` matches in any case.
    pub fn parse(line: &str) -> Option<Input> {
        let line = line.trim();
        if line.is_empty() {
            None
        } else if line.eq_ignore_ascii_case("exit") {
            Some(Input::Exit)
        } else {
            Some(Input::Url(line.to_string()))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub url: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct SessionSummary {
    pub imported: Vec<ImportReport>,
    pub failures: Vec<Failure>,
}

/// Import URLs one at a time until `exit` or the input runs out.
///
/// Progress lines for each imported recipe go to `out`. An unsupported host
/// ends the session with an error. A page that can't be fetched ends it only
/// when the output format's policy says so; extraction problems are reported
/// and the loop moves on.
pub fn run<I, W>(importer: &Importer, lines: I, out: &mut W) -> Result<SessionSummary, ImportError>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let policy = importer.settings().render.format.fetch_failure_policy();
    let mut summary = SessionSummary::default();

    for line in lines {
        let url = match Input::parse(&line) {
            None => continue,
            Some(Input::Exit) => break,
            Some(Input::Url(url)) => url,
        };

        match importer.import(&url) {
            Ok(report) => {
                writeln!(out, "Grabbed {}", report.title)?;
                writeln!(out, "Saved recipe to {}", report.document_path.display())?;
                for image in &report.image_paths {
                    writeln!(out, "Saved image to {}", image.display())?;
                }
                summary.imported.push(report);
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) if e.is_fetch_failure() && policy == FetchFailurePolicy::Halt => return Err(e),
            Err(e) => {
                eprintln!("{e}");
                summary.failures.push(Failure {
                    url,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(summary)
}
