//! `new` command: bootstrap a project from the template.

use std::process::ExitCode;

use clap::Args;

use crate::base::BasePaths;
use crate::error::ToolboxError;
use crate::launch::{self, LaunchMode, LaunchRequest};

/// Arguments for the new command
#[derive(Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,

    /// Destination directory (defaults to <base>/<name>)
    pub dest: Option<String>,
}

pub fn execute(args: &NewArgs, paths: &BasePaths) -> Result<ExitCode, ToolboxError> {
    let request = plan(args, paths);
    let code = launch::run(&request, LaunchMode::Wait)?;
    Ok(launch::to_exit_code(code))
}

/// The bootstrap script takes the name and destination positionally;
/// scaffolding itself (templates, git init) is entirely its business.
fn plan(args: &NewArgs, paths: &BasePaths) -> LaunchRequest {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| paths.project_dir(&args.name).to_string_lossy().into_owned());
    LaunchRequest::new(paths.new_project_script())
        .arg(args.name.clone())
        .arg(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base() -> BasePaths {
        BasePaths::resolve(Some(PathBuf::from("/base")))
    }

    #[test]
    fn test_destination_defaults_under_the_base() {
        let args = NewArgs {
            name: "paddle".into(),
            dest: None,
        };
        let request = plan(&args, &base());
        assert_eq!(request.program, PathBuf::from("/base/scripts/new-project.sh"));
        assert_eq!(request.args, vec!["paddle".to_string(), "/base/paddle".to_string()]);
        assert!(request.env.is_empty());
    }

    #[test]
    fn test_explicit_destination_is_passed_through() {
        let args = NewArgs {
            name: "paddle".into(),
            dest: Some("/tmp/elsewhere".into()),
        };
        let request = plan(&args, &base());
        assert_eq!(
            request.args,
            vec!["paddle".to_string(), "/tmp/elsewhere".to_string()]
        );
    }
}
