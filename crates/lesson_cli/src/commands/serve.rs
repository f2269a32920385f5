//! `lesson-eval serve`: run the web front-end.

use anyhow::Result;
use lesson_constant::defaults;
use lesson_web::{AppState, WebConfig};

use crate::cli::Cli;
use crate::context::AppContext;
use crate::output;

pub async fn handle(cli: &Cli, listen: Option<String>) -> Result<()> {
    let ctx = AppContext::init(cli, defaults::SERVER_LOG_LEVEL)?;

    let mut web_config = WebConfig::from_env();
    if let Some(addr) = listen {
        web_config = web_config.with_listen_addr(addr);
    }

    output::header("Lesson Evaluator web server");
    output::kv("listen", &web_config.listen_addr);
    output::kv("provider", ctx.config.provider.as_str());
    output::kv("model", &ctx.config.model);
    output::dim("Press Ctrl-C to stop.");

    let state = AppState {
        grader: ctx.grader.clone(),
    };
    let result = lesson_web::serve(web_config, state).await;

    ctx.teardown();
    result.map_err(Into::into)
}
