use std::io::Write;

use tracing::warn;

use nodepeek_core::refresh::StatusLevel;
use nodepeek_core::{Phase, Renderer, TargetKind, ViewState};

fn level_icon(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "⏳",
        StatusLevel::Success => "✅",
        StatusLevel::Danger => "❌",
    }
}

/// One line for an in-progress view.
pub fn format_loading_line(kind: TargetKind, view: &ViewState) -> String {
    format!(
        "{} {}: {}",
        level_icon(view.status.level),
        kind.title(),
        view.status.message
    )
}

/// Full block for a settled view: header, status, timestamp, content.
pub fn format_view_block(kind: TargetKind, view: &ViewState) -> String {
    let mut out = String::new();

    out.push_str("== ");
    out.push_str(kind.title());
    out.push_str(" ==");
    if view.simulation_badge {
        out.push_str("  [SIMULATION]");
    }
    out.push('\n');

    for (i, line) in view.status.text().lines().enumerate() {
        if i == 0 {
            out.push_str(level_icon(view.status.level));
            out.push(' ');
        } else if !line.is_empty() {
            out.push_str("   ");
        }
        out.push_str(line);
        out.push('\n');
    }

    if let Some(label) = &view.timestamp_label {
        out.push_str(label);
        out.push('\n');
    }

    out.push_str("---\n");
    out.push_str(&view.content);
    if !view.content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n");

    out
}

/// Writes every frame the controller produces to a terminal stream.
pub struct TerminalRenderer<W> {
    out: W,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, kind: TargetKind, view: &ViewState) {
        let text = match view.phase {
            Phase::Idle => return,
            Phase::Loading => format!("{}\n", format_loading_line(kind, view)),
            Phase::Success | Phase::Failure | Phase::NetworkError => {
                format!("\n{}", format_view_block(kind, view))
            }
        };

        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(
                event = "cli.render.write_failed",
                target = %kind,
                error = %e
            );
        }
    }
}

/// Drops every frame; used when only the final views are printed.
pub struct SilentRenderer;

impl Renderer for SilentRenderer {
    fn render(&mut self, _kind: TargetKind, _view: &ViewState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodepeek_core::refresh::view::{
        CONNECTION_ERROR_TEXT, NETWORK_ERROR_STATUS, SIMULATION_SUGGESTION,
    };
    use nodepeek_core::{FetchResult, RefreshTarget, SessionState};

    fn settled(result: &FetchResult, session: SessionState) -> ViewState {
        let target = RefreshTarget::file_content();
        let loading = ViewState::idle().loading(&target);
        loading.with_result(&target, result, session.observe(result))
    }

    #[test]
    fn test_loading_line() {
        let view = ViewState::idle().loading(&RefreshTarget::node_tip());
        let line = format_loading_line(TargetKind::NodeTip, &view);
        assert!(line.starts_with("⏳ Node tip: "));
        assert!(line.ends_with(&view.status.message));
    }

    #[test]
    fn test_block_for_simulated_success() {
        let result = FetchResult::succeeded("#!/bin/bash\necho hi", true);
        let view = settled(&result, SessionState::new());
        let block = format_view_block(TargetKind::FileContent, &view);

        assert!(block.starts_with("== File content ==  [SIMULATION]\n✅ "));
        assert!(block.contains("Last refreshed: "));
        assert!(block.contains("---\n#!/bin/bash\necho hi\n---\n"));
    }

    #[test]
    fn test_block_for_failure_with_hint() {
        let result = FetchResult::failed(
            "Docker is not installed or not available in the system PATH",
            false,
        );
        let view = settled(&result, SessionState::new());
        let block = format_view_block(TargetKind::FileContent, &view);

        assert!(block.starts_with("== File content ==\n❌ "));
        assert!(block.contains(&format!("   {SIMULATION_SUGGESTION}\n")));
        assert!(block.contains("Last attempt: "));
    }

    #[test]
    fn test_block_for_network_error() {
        let view = ViewState::idle()
            .loading(&RefreshTarget::node_tip())
            .network_error();
        let block = format_view_block(TargetKind::NodeTip, &view);

        assert!(block.contains(&format!("❌ {NETWORK_ERROR_STATUS}\n")));
        assert!(block.contains(&format!("---\n{CONNECTION_ERROR_TEXT}\n---\n")));
        assert!(!block.contains("Last "));
    }

    #[test]
    fn test_terminal_renderer_writes_frames() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let target = RefreshTarget::file_content();
        let loading = ViewState::idle().loading(&target);

        renderer.render(TargetKind::FileContent, &ViewState::idle());
        renderer.render(TargetKind::FileContent, &loading);
        renderer.render(TargetKind::FileContent, &loading.network_error());

        let written = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert!(lines[0].starts_with("⏳ File content: "));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "== File content ==");
    }
}
