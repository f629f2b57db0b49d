//! Session storage: the screen size plus the occupied windows collected for
//! a single placement query.
//!
//! A session is created once, appended to zero or more times, then read and
//! deleted by exactly one placement. The stored form is line oriented:
//!
//! ```text
//! <screenWidth> <screenHeight>
//! <x> <y> <width> <height>
//! ...
//! ```
//!
//! Stores perform no locking; a session is expected to be driven
//! sequentially by one caller.

use std::{
    collections::HashMap,
    env,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;
use tempfile::Builder;
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    geom::Rect,
};

/// Opaque token naming a session within a store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a token, typically received back from the caller.
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A fully loaded placement query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Whole screen, anchored at the origin.
    pub screen: Rect,
    /// Occupied windows in the order they were added.
    pub windows: Vec<Rect>,
}

impl Session {
    /// Parse stored session text. Blank lines are skipped; anything else that
    /// does not fit the format is a hard error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (lineno, header) = lines
            .next()
            .ok_or_else(|| Error::malformed(1, "missing screen size header"))?;
        let [width, height] = parse_fields::<2>(lineno, header)?;
        let screen = Rect::screen(width, height).ok_or_else(|| {
            Error::malformed(lineno, format!("screen size {width}x{height} is empty"))
        })?;

        let windows = lines
            .map(|(lineno, line)| {
                let [x, y, w, h] = parse_fields::<4>(lineno, line)?;
                Rect::from_origin_size(x, y, w, h).ok_or_else(|| {
                    Error::malformed(lineno, format!("window {w}x{h}+{x}+{y} is not a rectangle"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { screen, windows })
    }

    /// Header line recording the screen size.
    pub fn header_line(width: i32, height: i32) -> String {
        format!("{width} {height}\n")
    }

    /// Line recording one occupied window.
    pub fn window_line(window: &Rect) -> String {
        format!(
            "{} {} {} {}\n",
            window.left(),
            window.top(),
            window.width(),
            window.height()
        )
    }
}

/// Split `line` into exactly `N` integer fields.
fn parse_fields<const N: usize>(lineno: usize, line: &str) -> Result<[i32; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(Error::malformed(
            lineno,
            format!("expected {N} fields, found {}", tokens.len()),
        ));
    }
    let mut out = [0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = i32::from_str(token)
            .map_err(|e| Error::malformed(lineno, format!("bad integer '{token}': {e}")))?;
    }
    Ok(out)
}

/// Backing storage for sessions.
pub trait SessionStore {
    /// Start a new session for a screen of the given size.
    fn create(&self, screen_width: i32, screen_height: i32) -> Result<SessionId>;

    /// Record one more occupied window. Never creates a missing session.
    fn append(&self, id: &SessionId, window: Rect) -> Result<()>;

    /// Load a session without consuming it.
    fn read(&self, id: &SessionId) -> Result<Session>;

    /// Remove a session.
    fn delete(&self, id: &SessionId) -> Result<()>;

    /// Load and then delete a session. This is how a placement consumes its
    /// query.
    fn take(&self, id: &SessionId) -> Result<Session> {
        let session = self.read(id)?;
        self.delete(id)?;
        Ok(session)
    }
}

/// Sessions kept as small text files whose path is the session id.
#[derive(Clone, Debug)]
pub struct FileStore {
    /// Directory new session files are created in.
    dir: PathBuf,
}

impl FileStore {
    /// File name prefix for new sessions.
    pub const PREFIX: &'static str = "intelitile";

    /// Store sessions under `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Prefer the RAM-backed `/dev/shm` when present, otherwise the OS temp
    /// directory.
    pub fn default_dir() -> PathBuf {
        let shm = Path::new("/dev/shm");
        if shm.is_dir() {
            shm.to_path_buf()
        } else {
            env::temp_dir()
        }
    }

    /// Directory new sessions are created in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl SessionStore for FileStore {
    fn create(&self, screen_width: i32, screen_height: i32) -> Result<SessionId> {
        if Rect::screen(screen_width, screen_height).is_none() {
            return Err(Error::Geometry(format!(
                "screen size {screen_width}x{screen_height} is empty"
            )));
        }
        let (mut file, path) = Builder::new()
            .prefix(Self::PREFIX)
            .tempfile_in(&self.dir)
            .and_then(|tmp| tmp.keep().map_err(|e| e.error))
            .map_err(|e| Error::io(&self.dir, e))?;
        file.write_all(Session::header_line(screen_width, screen_height).as_bytes())
            .map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), screen_width, screen_height, "session created");
        Ok(SessionId::new(path.to_string_lossy()))
    }

    fn append(&self, id: &SessionId, window: Rect) -> Result<()> {
        let path = Path::new(id.as_str());
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
        file.write_all(Session::window_line(&window).as_bytes())
            .map_err(|e| Error::io(path, e))?;
        trace!(session = %id, %window, "window appended");
        Ok(())
    }

    fn read(&self, id: &SessionId) -> Result<Session> {
        let path = Path::new(id.as_str());
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Session::parse(&text)
    }

    fn delete(&self, id: &SessionId) -> Result<()> {
        let path = Path::new(id.as_str());
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
        debug!(session = %id, "session deleted");
        Ok(())
    }
}

/// In-process store, useful for tests and for embedding the solver.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Session text keyed by id, in the same format as [`FileStore`].
    sessions: Mutex<HashMap<SessionId, String>>,
    /// Source of fresh ids.
    next_id: AtomicU64,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// True when no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw stored text for a session, for inspection.
    pub fn raw(&self, id: &SessionId) -> Option<String> {
        self.sessions.lock().get(id).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn create(&self, screen_width: i32, screen_height: i32) -> Result<SessionId> {
        if Rect::screen(screen_width, screen_height).is_none() {
            return Err(Error::Geometry(format!(
                "screen size {screen_width}x{screen_height} is empty"
            )));
        }
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let id = SessionId::new(format!("mem-{n}"));
        self.sessions.lock().insert(
            id.clone(),
            Session::header_line(screen_width, screen_height),
        );
        Ok(id)
    }

    fn append(&self, id: &SessionId, window: Rect) -> Result<()> {
        let mut guard = self.sessions.lock();
        let text = guard
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        text.push_str(&Session::window_line(&window));
        Ok(())
    }

    fn read(&self, id: &SessionId) -> Result<Session> {
        let text = self
            .raw(id)
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        Session::parse(&text)
    }

    fn delete(&self, id: &SessionId) -> Result<()> {
        self.sessions
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::UnknownSession(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::from_origin_size(x, y, w, h).expect("valid rect")
    }

    #[test]
    fn parse_reads_screen_and_windows_in_order() {
        let s = Session::parse("1920 1080\n0 0 960 1080\n960 0 960 540\n").expect("parse");
        assert_eq!(s.screen, win(0, 0, 1920, 1080));
        assert_eq!(s.windows, vec![win(0, 0, 960, 1080), win(960, 0, 960, 540)]);
    }

    #[test]
    fn parse_accepts_header_only_and_blank_lines() {
        let s = Session::parse("100 100\n\n").expect("parse");
        assert!(s.windows.is_empty());
    }

    #[test]
    fn parse_accepts_negative_origins() {
        let s = Session::parse("100 100\n-10 -20 30 40\n").expect("parse");
        assert_eq!(s.windows, vec![win(-10, -20, 30, 40)]);
    }

    #[test]
    fn parse_rejects_missing_header() {
        let err = Session::parse("").expect_err("empty text");
        assert!(matches!(err, Error::Malformed { line: 1, .. }), "{err}");
    }

    #[test]
    fn parse_rejects_wrong_field_counts() {
        let err = Session::parse("100\n").expect_err("short header");
        assert!(matches!(err, Error::Malformed { line: 1, .. }), "{err}");
        let err = Session::parse("100 100\n0 0 10\n").expect_err("short window");
        assert!(matches!(err, Error::Malformed { line: 2, .. }), "{err}");
        let err = Session::parse("100 100\n0 0 10 10 10\n").expect_err("long window");
        assert!(matches!(err, Error::Malformed { line: 2, .. }), "{err}");
    }

    #[test]
    fn parse_rejects_non_integers() {
        let err = Session::parse("100 100\n0 0 ten 10\n").expect_err("non-integer");
        assert!(err.to_string().contains("bad integer 'ten'"), "{err}");
        let err = Session::parse("100.5 100\n").expect_err("float");
        assert!(matches!(err, Error::Malformed { line: 1, .. }), "{err}");
    }

    #[test]
    fn parse_rejects_empty_geometry() {
        let err = Session::parse("0 100\n").expect_err("empty screen");
        assert!(matches!(err, Error::Malformed { line: 1, .. }), "{err}");
        let err = Session::parse("100 100\n\n5 5 0 10\n").expect_err("empty window");
        assert!(matches!(err, Error::Malformed { line: 3, .. }), "{err}");
    }

    #[test]
    fn memory_store_round_trips_and_consumes() {
        let store = MemoryStore::new();
        let id = store.create(100, 100).expect("create");
        store.append(&id, win(0, 0, 50, 100)).expect("append");
        assert_eq!(store.raw(&id).as_deref(), Some("100 100\n0 0 50 100\n"));

        let session = store.take(&id).expect("take");
        assert_eq!(session.windows, vec![win(0, 0, 50, 100)]);
        assert!(store.is_empty());
        assert!(matches!(store.take(&id), Err(Error::UnknownSession(_))));
    }

    #[test]
    fn memory_store_issues_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.create(10, 10).expect("create");
        let b = store.create(10, 10).expect("create");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn memory_store_rejects_unknown_and_empty() {
        let store = MemoryStore::new();
        let missing = SessionId::new("mem-99");
        assert!(matches!(
            store.append(&missing, win(0, 0, 1, 1)),
            Err(Error::UnknownSession(_))
        ));
        assert!(matches!(store.create(0, 10), Err(Error::Geometry(_))));
    }
}
