//! The interactive scaffolding flow.
//!
//! Steps run strictly in order, each finishing before the next starts:
//! choose template, name project, choose destination, resolve and create the
//! project directory, copy the template, then optionally install
//! dependencies.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{info, warn};

use sprout_runner::{InstallOutcome, Installer, PackageManager, RunnerError};
use sprout_templates::{
    MaterializeReport, Materializer, PathResolver, ProjectLocation, ProjectName, Template,
    TemplateError, TemplateLoader,
};

use crate::prompt::{PromptError, Prompter, Validator};
use crate::settings::Settings;

const TEMPLATE_QUESTION: &str = "What project template would you like to generate?";
const NAME_QUESTION: &str = "Project name:";
const PATH_QUESTION: &str = "Where to create the project:";
const INSTALL_QUESTION: &str = "Would you like to install dependencies?";
const MANAGER_QUESTION: &str = "Choose a package manager:";

/// Default destination, relative to the invocation directory.
const DEFAULT_DESTINATION: &str = ".";

#[derive(Error, Debug)]
pub enum WizardError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Validated answers to the setup questions.
#[derive(Debug, Clone)]
pub struct Answers {
    pub template: Template,
    pub project_name: ProjectName,
    /// Destination exactly as typed.
    pub destination: String,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct Summary {
    pub answers: Answers,
    pub location: ProjectLocation,
    pub report: MaterializeReport,
    /// Present when the user chose to install dependencies.
    pub install: Option<InstallOutcome>,
}

impl Summary {
    /// Message printed once everything, including the install, has finished.
    pub fn closing_message(&self) -> String {
        format!(
            "Happy coding! Next steps:\ncd ./{}\nand start your project",
            self.answers.project_name
        )
    }
}

/// Drives one scaffolding run.
pub struct Wizard<'a, P, I> {
    settings: &'a Settings,
    prompter: P,
    installer: I,
    materializer: Materializer,
}

impl<'a, P: Prompter, I: Installer> Wizard<'a, P, I> {
    pub fn new(settings: &'a Settings, prompter: P, installer: I) -> Self {
        Self {
            settings,
            prompter,
            installer,
            materializer: Materializer::new(),
        }
    }

    /// Run every step to completion.
    pub async fn run(&mut self) -> Result<Summary, WizardError> {
        let answers = self.ask_setup()?;

        let resolver = PathResolver::new(&self.settings.invocation_dir);
        let location = resolver.resolve(&answers.destination, &answers.project_name)?;
        location.create()?;

        let report = self.generate(&answers.template, &location)?;

        let install = match self.ask_install()? {
            Some(manager) => Some(self.install(manager, &location).await?),
            None => None,
        };

        Ok(Summary {
            answers,
            location,
            report,
            install,
        })
    }

    /// Template, name and destination questions.
    fn ask_setup(&mut self) -> Result<Answers, WizardError> {
        let templates = TemplateLoader::new(&self.settings.templates_root).list_non_empty()?;
        let names: Vec<String> = templates.iter().map(|t| t.name.clone()).collect();

        let choice = self.prompter.select(TEMPLATE_QUESTION, &names)?;
        let template = templates
            .into_iter()
            .nth(choice)
            .ok_or_else(|| TemplateError::NotFound(format!("choice #{choice}")))?;

        let raw_name = self
            .prompter
            .input(NAME_QUESTION, None, Some(ProjectName::validate as Validator))?;
        let project_name = ProjectName::parse(&raw_name)?;

        let destination = self
            .prompter
            .input(PATH_QUESTION, Some(DEFAULT_DESTINATION), None)?;

        info!(
            "Generating '{}' from template '{}'",
            project_name, template.name
        );

        Ok(Answers {
            template,
            project_name,
            destination,
        })
    }

    /// Copy the template while a spinner runs.
    fn generate(
        &self,
        template: &Template,
        location: &ProjectLocation,
    ) -> Result<MaterializeReport, WizardError> {
        let spinner = self.spinner("Generating project...");

        match self
            .materializer
            .materialize(&template.path, &location.project_path)
        {
            Ok(report) => {
                spinner.finish_with_message("Project generated");
                Ok(report)
            }
            Err(e) => {
                spinner.abandon_with_message("Project generation failed");
                Err(e.into())
            }
        }
    }

    /// Ask whether to install and, if so, with which package manager.
    fn ask_install(&mut self) -> Result<Option<PackageManager>, WizardError> {
        if !self.prompter.confirm(INSTALL_QUESTION, true)? {
            return Ok(None);
        }

        let names: Vec<String> = PackageManager::ALL.iter().map(|m| m.to_string()).collect();
        let choice = self.prompter.select(MANAGER_QUESTION, &names)?;
        let manager = PackageManager::ALL
            .get(choice)
            .copied()
            .ok_or_else(|| RunnerError::UnknownPackageManager(format!("choice #{choice}")))?;
        Ok(Some(manager))
    }

    async fn install(
        &self,
        manager: PackageManager,
        location: &ProjectLocation,
    ) -> Result<InstallOutcome, WizardError> {
        let outcome = self.installer.install(manager, &location.project_path).await?;
        if !outcome.success() {
            warn!(
                "`{}` exited with {:?}; continuing",
                outcome.command, outcome.exit_code
            );
        }
        Ok(outcome)
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.settings.show_spinner {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::Path;

    use sprout_runner::MockInstaller;
    use sprout_templates::PROJECT_NAME_HINT;
    use tempfile::{tempdir, TempDir};

    use crate::prompt::{PromptResult, Validator};

    enum Answer {
        Select(usize),
        Text(&'static str),
        Confirm(bool),
    }

    /// Answers questions from a script, re-asking on failed validation.
    #[derive(Default)]
    struct ScriptedPrompter {
        script: VecDeque<Answer>,
        asked: Vec<String>,
        rejections: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(script: Vec<Answer>) -> Self {
            Self {
                script: script.into(),
                ..Default::default()
            }
        }

        fn next(&mut self, message: &str) -> Answer {
            self.asked.push(message.to_string());
            self.script
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer for {message:?}"))
        }
    }

    impl Prompter for &mut ScriptedPrompter {
        fn select(&mut self, message: &str, items: &[String]) -> PromptResult<usize> {
            match self.next(message) {
                Answer::Select(i) => {
                    assert!(i < items.len());
                    Ok(i)
                }
                _ => panic!("expected a select answer for {message:?}"),
            }
        }

        fn input(
            &mut self,
            message: &str,
            default: Option<&str>,
            validate: Option<Validator>,
        ) -> PromptResult<String> {
            loop {
                let answer = match self.next(message) {
                    Answer::Text("") => default.unwrap_or_default().to_string(),
                    Answer::Text(text) => text.to_string(),
                    _ => panic!("expected a text answer for {message:?}"),
                };
                match validate.map(|v| v(&answer)) {
                    Some(Err(hint)) => self.rejections.push(hint),
                    _ => return Ok(answer),
                }
            }
        }

        fn confirm(&mut self, message: &str, _default: bool) -> PromptResult<bool> {
            match self.next(message) {
                Answer::Confirm(yes) => Ok(yes),
                _ => panic!("expected a confirm answer for {message:?}"),
            }
        }
    }

    struct Fixture {
        templates: TempDir,
        workdir: TempDir,
        settings: Settings,
    }

    fn fixture() -> Fixture {
        let templates = tempdir().unwrap();
        let workdir = tempdir().unwrap();

        let basic = templates.path().join("basic");
        fs::create_dir_all(basic.join("sub")).unwrap();
        fs::create_dir_all(basic.join("pkgmeta")).unwrap();
        fs::write(basic.join("a.txt"), "hello").unwrap();
        fs::write(basic.join("sub/b.txt"), "world").unwrap();
        fs::write(basic.join("pkgmeta/x.json"), "{}").unwrap();
        fs::create_dir_all(templates.path().join("web")).unwrap();

        let settings = Settings {
            templates_root: templates.path().to_path_buf(),
            invocation_dir: workdir.path().to_path_buf(),
            show_spinner: false,
        };

        Fixture {
            templates,
            workdir,
            settings,
        }
    }

    fn is_empty(dir: &Path) -> bool {
        fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_generates_project_without_install() {
        let fx = fixture();
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Text("demo"),
            Answer::Text(""),
            Answer::Confirm(false),
        ]);
        let installer = MockInstaller::new();

        let summary = Wizard::new(&fx.settings, &mut prompter, installer.clone())
            .run()
            .await
            .unwrap();

        let demo = fx.workdir.path().join("demo");
        assert_eq!(summary.location.project_path, demo);
        assert_eq!(summary.answers.template.name, "basic");
        assert_eq!(fs::read_to_string(demo.join("a.txt")).unwrap(), "hello");
        assert_eq!(fs::read_to_string(demo.join("sub/b.txt")).unwrap(), "world");
        assert!(!demo.join("pkgmeta").exists());
        assert_eq!(summary.report.files, 2);
        assert!(summary.install.is_none());
        assert_eq!(installer.call_count(), 0);
        assert_eq!(
            prompter.asked,
            vec![TEMPLATE_QUESTION, NAME_QUESTION, PATH_QUESTION, INSTALL_QUESTION]
        );
        assert_eq!(
            summary.closing_message(),
            "Happy coding! Next steps:\ncd ./demo\nand start your project"
        );
        assert!(fx.templates.path().join("basic/pkgmeta").exists());
    }

    #[tokio::test]
    async fn test_invalid_name_is_asked_again() {
        let fx = fixture();
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Text("my app"),
            Answer::Text("my/app"),
            Answer::Text("my-app"),
            Answer::Text("."),
            Answer::Confirm(false),
        ]);

        let summary = Wizard::new(&fx.settings, &mut prompter, MockInstaller::new())
            .run()
            .await
            .unwrap();

        assert_eq!(summary.answers.project_name.as_str(), "my-app");
        assert_eq!(prompter.rejections, vec![PROJECT_NAME_HINT, PROJECT_NAME_HINT]);
        assert!(fx.workdir.path().join("my-app/a.txt").exists());
    }

    #[tokio::test]
    async fn test_installs_with_chosen_manager() {
        let fx = fixture();
        fs::create_dir(fx.workdir.path().join("apps")).unwrap();
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Text("demo"),
            Answer::Text("apps"),
            Answer::Confirm(true),
            Answer::Select(2),
        ]);
        let installer = MockInstaller::new();

        let summary = Wizard::new(&fx.settings, &mut prompter, installer.clone())
            .run()
            .await
            .unwrap();

        let calls = installer.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].manager, PackageManager::Pnpm);
        assert_eq!(calls[0].project_path, fx.workdir.path().join("apps/demo"));
        assert!(summary.install.unwrap().success());
    }

    #[tokio::test]
    async fn test_failed_install_still_completes() {
        let fx = fixture();
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Text("demo"),
            Answer::Text("."),
            Answer::Confirm(true),
            Answer::Select(0),
        ]);

        let summary = Wizard::new(&fx.settings, &mut prompter, MockInstaller::new().with_exit_code(1))
            .run()
            .await
            .unwrap();

        assert_eq!(summary.install.as_ref().unwrap().exit_code, Some(1));
        assert!(summary.closing_message().starts_with("Happy coding!"));
    }

    #[tokio::test]
    async fn test_missing_destination_stops_before_any_change() {
        let fx = fixture();
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Text("demo"),
            Answer::Text("nowhere"),
        ]);
        let installer = MockInstaller::new();

        let err = Wizard::new(&fx.settings, &mut prompter, installer.clone())
            .run()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WizardError::Template(TemplateError::DestinationMissing(_))
        ));
        assert_eq!(
            err.to_string(),
            format!(
                "The path {} does not exist.",
                fx.workdir.path().join("nowhere").display()
            )
        );
        assert!(is_empty(fx.workdir.path()));
        assert_eq!(prompter.asked.len(), 3);
        assert_eq!(installer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_file_at_project_path_is_reported() {
        let fx = fixture();
        fs::write(fx.workdir.path().join("demo"), "taken").unwrap();
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Select(1),
            Answer::Text("demo"),
            Answer::Text("."),
        ]);

        let err = Wizard::new(&fx.settings, &mut prompter, MockInstaller::new())
            .run()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WizardError::Template(TemplateError::ProjectCreation { .. })
        ));
        assert_eq!(fs::read_to_string(fx.workdir.path().join("demo")).unwrap(), "taken");
    }

    #[tokio::test]
    async fn test_no_templates() {
        let fx = fixture();
        let empty = tempdir().unwrap();
        let settings = Settings {
            templates_root: empty.path().to_path_buf(),
            ..fx.settings.clone()
        };
        let mut prompter = ScriptedPrompter::new(vec![]);

        let err = Wizard::new(&settings, &mut prompter, MockInstaller::new())
            .run()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WizardError::Template(TemplateError::NoTemplates(_))
        ));
        assert!(prompter.asked.is_empty());
    }
}
