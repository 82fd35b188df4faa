use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use vitae_core::db::open_db_in_memory;
use vitae_core::{
    Document, EditorListSurface, ExportError, InputEvent, PreviewSurface, PrintDialog,
    RenderOrchestrator, SnapshotError, SnapshotRenderer, SqliteDocumentRepository, StatusSurface,
    TemplateRegistry, PAGE_WIDTH_MM,
};

#[derive(Default)]
struct CaptureLog {
    capture_width: Option<u32>,
    busy: bool,
    width_during_capture: Option<u32>,
    busy_during_capture: bool,
    errors: Vec<String>,
}

#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<CaptureLog>>);

struct CapturePreview(SharedLog);

impl PreviewSurface for CapturePreview {
    fn show(&mut self, _markup: &str) {}

    fn set_capture_width(&mut self, width_mm: u32) {
        self.0 .0.borrow_mut().capture_width = Some(width_mm);
    }

    fn clear_capture_width(&mut self) {
        self.0 .0.borrow_mut().capture_width = None;
    }
}

struct NullEditorList;

impl EditorListSurface for NullEditorList {
    fn rebuild(&mut self, _document: &Document) {}
}

struct CaptureStatus(SharedLog);

impl StatusSurface for CaptureStatus {
    fn flash_saved(&mut self, _visible_for: Duration) {}

    fn set_export_busy(&mut self, busy: bool) {
        self.0 .0.borrow_mut().busy = busy;
    }

    fn show_error(&mut self, message: &str) {
        self.0 .0.borrow_mut().errors.push(message.to_string());
    }
}

/// Records the transient presentation state observed mid-capture, then
/// echoes the markup back as the artifact bytes.
struct EchoRenderer {
    log: SharedLog,
    fail: bool,
}

impl SnapshotRenderer for EchoRenderer {
    fn rasterize(&self, markup: &str, _page_width_mm: u32) -> Result<Vec<u8>, SnapshotError> {
        {
            let mut log = self.log.0.borrow_mut();
            log.width_during_capture = log.capture_width;
            log.busy_during_capture = log.busy;
        }
        if self.fail {
            return Err(SnapshotError {
                message: "rasterizer out of memory".to_string(),
            });
        }
        Ok(markup.as_bytes().to_vec())
    }
}

type Harness<'conn> =
    RenderOrchestrator<SqliteDocumentRepository<'conn>, CapturePreview, NullEditorList, CaptureStatus>;

fn bootstrap(conn: &rusqlite::Connection) -> (Harness<'_>, SharedLog) {
    let log = SharedLog::default();
    let orchestrator = RenderOrchestrator::bootstrap(
        SqliteDocumentRepository::new(conn),
        TemplateRegistry::with_builtins(),
        CapturePreview(log.clone()),
        NullEditorList,
        CaptureStatus(log.clone()),
    )
    .unwrap();
    (orchestrator, log)
}

#[test]
fn export_writes_artifact_named_after_the_person() {
    let conn = open_db_in_memory().unwrap();
    let (mut orchestrator, log) = bootstrap(&conn);
    orchestrator
        .handle_input(InputEvent::named("fullName", "Ada Lovelace"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let renderer = EchoRenderer {
        log: log.clone(),
        fail: false,
    };
    let path = orchestrator.export(&renderer, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("Ada Lovelace.pdf"));
    // The artifact snapshots the markup the live document rendered at
    // capture start.
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, orchestrator.preview_markup().as_bytes());

    let log = log.0.borrow();
    assert_eq!(log.width_during_capture, Some(PAGE_WIDTH_MM));
    assert!(log.busy_during_capture);
    assert_eq!(log.capture_width, None, "capture width must be restored");
    assert!(!log.busy, "busy marker must be restored");
    assert!(log.errors.is_empty());
}

#[test]
fn export_falls_back_to_the_default_artifact_name() {
    let conn = open_db_in_memory().unwrap();
    let (mut orchestrator, log) = bootstrap(&conn);

    let dir = tempfile::tempdir().unwrap();
    let renderer = EchoRenderer { log, fail: false };
    let path = orchestrator.export(&renderer, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("Resume.pdf"));
}

#[test]
fn failed_export_restores_state_and_reports_once() {
    let conn = open_db_in_memory().unwrap();
    let (mut orchestrator, log) = bootstrap(&conn);

    let dir = tempfile::tempdir().unwrap();
    let renderer = EchoRenderer {
        log: log.clone(),
        fail: true,
    };
    let result = orchestrator.export(&renderer, dir.path());
    assert!(matches!(result, Err(ExportError::Snapshot(_))));

    let log = log.0.borrow();
    assert_eq!(log.capture_width, None, "capture width must be restored on failure");
    assert!(!log.busy, "busy marker must be restored on failure");
    assert_eq!(log.errors.len(), 1);
    assert!(log.errors[0].contains("rasterizer out of memory"));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn print_delegates_to_the_platform_dialog() {
    struct CountingDialog(Rc<RefCell<usize>>);

    impl PrintDialog for CountingDialog {
        fn open(&self) {
            *self.0.borrow_mut() += 1;
        }
    }

    let conn = open_db_in_memory().unwrap();
    let (orchestrator, _log) = bootstrap(&conn);

    let opens = Rc::new(RefCell::new(0));
    orchestrator.print(&CountingDialog(opens.clone()));
    assert_eq!(*opens.borrow(), 1);
}
