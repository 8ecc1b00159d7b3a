use std::io::Write;

use tracing::debug;

use crate::domain::entities::EnvironmentInput;
use crate::domain::ports::{EnvironmentDeployer, Progress};
use crate::error::DeployResult;
use crate::ui::context::UiContext;
use crate::ui::json::{write_event, CompleteEvent, DryRunEvent, StartEvent};
use crate::ui::views::environment::{render_dry_run, render_environment};

use super::{deploy_succeeded, dry_run_succeeded, COMMAND_NAME, DEPLOY_FAILED, DEPLOY_START};

/// Options and collaborators for deploying the oam-ecs environment.
///
/// Parameterized by its ports so tests can inject stub deployers and
/// recording progress indicators.
pub struct DeployEnvironmentOpts<D, P>
where
    D: EnvironmentDeployer,
    P: Progress,
{
    pub dry_run: bool,
    deployer: D,
    progress: P,
    ui: UiContext,
}

impl<D, P> DeployEnvironmentOpts<D, P>
where
    D: EnvironmentDeployer,
    P: Progress,
{
    pub fn new(deployer: D, progress: P, ui: UiContext) -> Self {
        Self {
            dry_run: false,
            deployer,
            progress,
            ui,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Deploy the environment stack, or write its template on dry run.
    ///
    /// Results are written to `out`; errors from the deployer are returned
    /// unchanged.
    pub fn execute(&mut self, out: &mut impl Write) -> DeployResult<()> {
        if self.ui.json {
            write_event(out, &StartEvent::new(COMMAND_NAME, self.dry_run))?;
        }

        if self.dry_run {
            self.dry_run_environment(out)
        } else {
            self.deploy_environment(out)
        }
    }

    fn dry_run_environment(&mut self, out: &mut impl Write) -> DeployResult<()> {
        let input = EnvironmentInput::new();

        let file = self.deployer.dry_run_environment(&input)?;
        debug!(template = %file.display(), "dry run wrote environment template");

        if self.ui.json {
            write_event(out, &DryRunEvent::new(COMMAND_NAME, &file))?;
        } else {
            let message = dry_run_succeeded(&file);
            out.write_all(render_dry_run(&message, self.ui.color, self.ui.unicode).as_bytes())?;
        }
        Ok(())
    }

    fn deploy_environment(&mut self, out: &mut impl Write) -> DeployResult<()> {
        let input = EnvironmentInput::new();

        self.progress.start(DEPLOY_START);

        let env = match self.deployer.deploy_environment(&input) {
            Ok(env) => env,
            Err(err) => {
                self.progress.fail(DEPLOY_FAILED);
                return Err(err);
            }
        };

        self.progress.succeed(&deploy_succeeded(env.stack_name()));

        if self.ui.json {
            write_event(
                out,
                &CompleteEvent::new(COMMAND_NAME, env.stack_name(), env.outputs()),
            )?;
        } else {
            out.write_all(render_environment(&env, self.ui.color, self.ui.unicode).as_bytes())?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (D, P) {
        (self.deployer, self.progress)
    }
}
