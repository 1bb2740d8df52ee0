use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

const OK_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK";
const ERROR_RESPONSE: &[u8] =
    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

#[derive(Clone, Copy)]
pub enum ServerBehavior {
    /// Answer every request with 200 OK.
    AlwaysOk,
    /// Alternate between 200 and 500, one response per connection.
    AlternateOkError,
    /// Accept, read the request, and never answer.
    NeverRespond,
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP fixture server for tests.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(behavior: ServerBehavior) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let counter = Arc::new(AtomicUsize::new(0));

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || handle_client(stream, behavior, &counter));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, behavior: ServerBehavior, counter: &AtomicUsize) {
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }

    let response = match behavior {
        ServerBehavior::AlwaysOk => OK_RESPONSE,
        ServerBehavior::AlternateOkError => {
            let served = counter.fetch_add(1, Ordering::SeqCst);
            if served % 2 == 0 {
                OK_RESPONSE
            } else {
                ERROR_RESPONSE
            }
        }
        ServerBehavior::NeverRespond => {
            thread::sleep(Duration::from_secs(1));
            drop(stream.shutdown(Shutdown::Both));
            return;
        }
    };

    if stream.write_all(response).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `latmeter` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_latmeter<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = latmeter_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run latmeter failed: {}", err))
}

fn latmeter_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_latmeter").map_or_else(
        || Err("CARGO_BIN_EXE_latmeter missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
