//! `hook-install` command: install the repository git hooks.

use std::process::ExitCode;

use clap::Args;

use crate::base::BasePaths;
use crate::error::ToolboxError;
use crate::launch::{self, LaunchMode, LaunchRequest};

/// Arguments for the hook-install command
#[derive(Args)]
pub struct HookInstallArgs {
    /// Repository to install hooks into (defaults to the visualizer checkout)
    pub repo: Option<String>,
}

pub fn execute(args: &HookInstallArgs, paths: &BasePaths) -> Result<ExitCode, ToolboxError> {
    let request = plan(args, paths);
    let code = launch::run(&request, LaunchMode::Wait)?;
    Ok(launch::to_exit_code(code))
}

fn plan(args: &HookInstallArgs, paths: &BasePaths) -> LaunchRequest {
    let repo = args
        .repo
        .clone()
        .unwrap_or_else(|| paths.default_project().to_string_lossy().into_owned());
    LaunchRequest::new(paths.hook_install_script()).arg(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base() -> BasePaths {
        BasePaths::resolve(Some(PathBuf::from("/base")))
    }

    #[test]
    fn test_repo_defaults_to_the_visualizer_checkout() {
        let args = HookInstallArgs { repo: None };
        let request = plan(&args, &base());
        assert_eq!(
            request.program,
            PathBuf::from("/base/scripts/install-hooks.sh")
        );
        assert_eq!(request.args, vec!["/base/visualizer".to_string()]);
    }

    #[test]
    fn test_explicit_repo_is_passed_through() {
        let args = HookInstallArgs {
            repo: Some("/work/other-repo".into()),
        };
        let request = plan(&args, &base());
        assert_eq!(request.args, vec!["/work/other-repo".to_string()]);
    }
}
