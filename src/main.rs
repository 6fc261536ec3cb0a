use anyhow::Context;
use pushform::{
    Feedback, FeedbackConfig, Field, Form, FormSubmitter, HttpTransport, NotificationCenter,
};
use std::{path::PathBuf, time::Duration};

const HELP: &str = "\
Submit a form and show the resulting notifications

USAGE:
  pushform [OPTIONS] --action <URL>

OPTIONS:
  --config <PATH>        JSON configuration file
  --action <URL>         Form action URL (defaults to submit.page_url)
  --field <NAME=VALUE>   Form field, repeatable
  --required <NAME>      Mark a field as required, repeatable
  --timeout-ms <MS>      Submission timeout
  -h, --help             Print help
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    pushform::logging::init()?;

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config = match args.opt_value_from_str::<_, PathBuf>("--config")? {
        Some(path) => FeedbackConfig::load(&path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => FeedbackConfig::default(),
    };
    let action: Option<String> = args.opt_value_from_str("--action")?;
    let timeout_ms: Option<u64> = args.opt_value_from_str("--timeout-ms")?;
    let fields: Vec<String> = args.values_from_str("--field")?;
    let required: Vec<String> = args.values_from_str("--required")?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }

    let mut form = Form::new(action);
    for field in &fields {
        let (name, value) = field
            .split_once('=')
            .with_context(|| format!("field `{field}` is not NAME=VALUE"))?;
        form = form.with_field(Field::text(name).with_value(value));
    }
    for name in required {
        match form.field_mut(&name) {
            Some(field) => field.required = true,
            None => form = form.with_field(Field::text(name).required()),
        }
    }

    let center = NotificationCenter::new(config.toast.clone())?;
    let feedback = Feedback::new(Some(center.clone()), &config.submit);
    let submitter = FormSubmitter::new(HttpTransport::new(), feedback, config.submit.clone());

    let mut submission = submitter.submission();
    if let Some(ms) = timeout_ms {
        submission = submission.timeout(Duration::from_millis(ms));
    }

    let outcome = submitter.submit(&mut form, submission).await?;
    tracing::info!(?outcome, "submission finished");
    println!("{}", center.render());

    center.settled().await;
    Ok(())
}
