// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `thinkgate classify`: run only the annotator and show its decision.

use std::sync::Arc;

use thinkgate_annotator::{Annotation, AnnotationOutcome, DifficultyAnnotator};
use thinkgate_config::ThinkgateConfig;
use thinkgate_core::{ChatProvider, Conversation, ThinkgateError};
use thinkgate_openai::OpenAiProvider;

use crate::input::InputArgs;
use crate::output;

pub async fn run_classify(config: &ThinkgateConfig, input: &InputArgs) -> Result<(), ThinkgateError> {
    let conversation = input.load()?;
    let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiProvider::new(&config.endpoint)?);
    classify(provider, config, &conversation).await;
    Ok(())
}

pub(crate) async fn classify(
    provider: Arc<dyn ChatProvider>,
    config: &ThinkgateConfig,
    conversation: &Conversation,
) -> Annotation {
    let annotator = DifficultyAnnotator::new(provider, config.assessor.clone());
    output::progress(&format!("assessing difficulty with {}...", config.assessor.model));
    let annotation = annotator.annotate_with_outcome(conversation).await;

    match annotation.outcome {
        AnnotationOutcome::Classified(verdict) => println!("verdict: {verdict}"),
        other => output::notice(&format!("no verdict: {other}")),
    }

    if let Some(index) = annotation.conversation.last_user_index()
        && let Some(message) = annotation.conversation.get(index)
    {
        output::annotated(message.text());
    }

    annotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinkgate_annotator::Verdict;
    use thinkgate_test_utils::{MockProvider, MockReply};

    #[tokio::test]
    async fn classify_makes_a_single_call() {
        let provider = Arc::new(MockProvider::with_replies(vec![MockReply::content("hard")]));

        let annotation = classify(
            provider.clone(),
            &ThinkgateConfig::default(),
            &Conversation::single_user("Prove Fermat's last theorem"),
        )
        .await;

        assert_eq!(annotation.outcome, AnnotationOutcome::Classified(Verdict::Hard));
        assert_eq!(provider.call_count().await, 1);
    }

    #[tokio::test]
    async fn classify_reports_failure_without_erroring() {
        let provider = Arc::new(MockProvider::with_replies(vec![MockReply::error("timeout")]));

        let annotation = classify(
            provider,
            &ThinkgateConfig::default(),
            &Conversation::single_user("hi"),
        )
        .await;

        assert_eq!(annotation.outcome, AnnotationOutcome::AssessorFailed);
        assert_eq!(annotation.outcome.verdict(), None);
    }
}
