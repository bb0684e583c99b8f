//! Interactive session driving one widget from line commands.
//!
//! Loads run on spawned tasks so the prompt stays responsive while a
//! request is outstanding. At end of input the session waits for loads
//! still in flight; `quit` abandons them.

use crate::command::{Command, CommandError, USAGE};
use crate::render::{render_scopes, render_text};
use data_form_integration::ItemsBackend;
use data_form_widget::{DataForm, LoadOutcome, Notifier, RecordLayout};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::debug;

type SharedOutput = Arc<Mutex<Box<dyn Write + Send>>>;

/// Runs the session until end of input or `quit`.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub async fn run<B, N, R>(
    form: DataForm<B, N>,
    layout: RecordLayout,
    input: R,
    output: impl Write + Send + 'static,
) -> io::Result<()>
where
    B: ItemsBackend + 'static,
    N: Notifier + 'static,
    R: AsyncBufRead + Unpin,
{
    let out: SharedOutput = Arc::new(Mutex::new(Box::new(output)));
    let mut pending: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = input.lines();

    print(&out, &format!("{} widget. Type 'help' for commands.\n", form.integration_name()));

    while let Some(line) = lines.next_line().await? {
        pending.retain(|handle| !handle.is_finished());

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                print(&out, &format!("{err}\n"));
                continue;
            }
        };

        match command {
            Command::Help => print(&out, &format!("{USAGE}\n")),
            Command::Scopes => print(&out, &render_scopes(form.selector())),
            Command::Select(key) => match form.selector().select_by_key(&key) {
                Ok(scope) => print(&out, &format!("Selected {scope}\n")),
                Err(err) => print(&out, &format!("{err}\n")),
            },
            Command::Unselect => {
                form.selector().unselect();
                print(&out, "Scope cleared\n");
            }
            Command::Load => {
                let load = form.load();
                let task_out = Arc::clone(&out);
                pending.push(tokio::spawn(async move {
                    if let LoadOutcome::Loaded { count, .. } = load.await {
                        print(&task_out, &format!("Loaded {count} records\n"));
                    }
                }));
                print(&out, "Loading...\n");
            }
            Command::Clear => {
                form.clear();
                print(&out, "Cleared loaded data\n");
            }
            Command::Show => print(&out, &render_text(&form.render(layout))),
            Command::Quit => {
                debug!(abandoned = pending.len(), "Session quit");
                for handle in &pending {
                    handle.abort();
                }
                return Ok(());
            }
        }
    }

    debug!(outstanding = pending.len(), "Input closed, waiting for loads");
    for handle in pending {
        // A load task only fails by panicking; its outcome was already reported.
        let _ = handle.await;
    }
    Ok(())
}

fn print(out: &SharedOutput, text: &str) {
    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use data_form_core::Scope;
    use data_form_integration::{Credentials, FetchError, ItemsRequest, Record};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct StubBackend {
        requests: Mutex<Vec<ItemsRequest>>,
    }

    #[async_trait]
    impl ItemsBackend for StubBackend {
        async fn fetch_items(&self, request: &ItemsRequest) -> Result<Vec<Record>, FetchError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(vec![
                Record::new("1", "Ada").with_email("ada@example.com"),
                Record::new("2", "Grace"),
            ])
        }
    }

    #[derive(Default)]
    struct StubNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for StubNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    struct Harness {
        form: DataForm<StubBackend, StubNotifier>,
        backend: Arc<StubBackend>,
        notifier: Arc<StubNotifier>,
        output: SharedBuffer,
    }

    impl Harness {
        fn new(integration: &str) -> Self {
            let backend = Arc::new(StubBackend::default());
            let notifier = Arc::new(StubNotifier::default());
            let form = DataForm::new(
                integration,
                Credentials::new("token"),
                Arc::clone(&backend),
                Arc::clone(&notifier),
            );
            Self {
                form,
                backend,
                notifier,
                output: SharedBuffer::default(),
            }
        }

        async fn run(&self, script: &str) {
            run(
                self.form.clone(),
                RecordLayout::Compact,
                script.as_bytes(),
                self.output.clone(),
            )
            .await
            .expect("session");
        }
    }

    #[tokio::test]
    async fn select_and_load_populates_records() {
        let harness = Harness::new("HubSpot");

        harness.run("select Contacts\nload\n").await;

        let output = harness.output.contents();
        assert!(output.contains("Selected Contacts"));
        assert!(output.contains("Loading..."));
        assert!(output.contains("Loaded 2 records"));
        assert_eq!(harness.form.records().len(), 2);

        let requests = harness.backend.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].scope, Some(Scope::Contacts));
    }

    #[tokio::test]
    async fn show_renders_loaded_records() {
        let harness = Harness::new("Notion");
        harness.run("load\n").await;

        harness.run("show\n").await;

        let output = harness.output.contents();
        assert!(output.contains("--- 1 ---"));
        assert!(output.contains("  Email: ada@example.com"));
        assert!(output.contains("--- 2 ---"));
    }

    #[tokio::test]
    async fn load_without_scope_notifies() {
        let harness = Harness::new("HubSpot");

        harness.run("load\nshow\n").await;

        assert!(harness.backend.requests.lock().unwrap().is_empty());
        let messages = harness.notifier.messages.lock().unwrap().clone();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("scope"));
    }

    #[tokio::test]
    async fn clear_empties_records() {
        let harness = Harness::new("Airtable");
        harness.run("load\n").await;

        harness.run("clear\nshow\n").await;

        let output = harness.output.contents();
        assert!(output.contains("Cleared loaded data"));
        assert!(output.contains("No data loaded"));
        assert!(harness.form.records().is_empty());
    }

    #[tokio::test]
    async fn quit_stops_processing() {
        let harness = Harness::new("HubSpot");

        harness.run("quit\nselect Deals\n").await;

        assert_eq!(harness.form.selector().selected(), None);
    }

    #[tokio::test]
    async fn bad_input_is_reported() {
        let harness = Harness::new("HubSpot");

        harness.run("\nfetch\nselect Tickets\nscopes\n").await;

        let output = harness.output.contents();
        assert!(output.contains("Unknown command 'fetch'"));
        assert!(output.contains("unknown scope: 'Tickets'"));
        assert!(output.contains("[ ] Contacts"));
    }
}
