use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs, UdpSocket};
#[cfg(unix)]
use std::os::unix::net::{UnixDatagram, UnixStream};
#[cfg(unix)]
use std::path::PathBuf;
use std::process;
use std::sync::{Mutex, OnceLock, PoisonError};

use super::{Facility, Priority};
use crate::errors::{LogError, Result};
use crate::logger::RemoteSink;
use crate::utils::{self, DateTimeFormatExt};

/// Well-known local syslog daemon sockets, probed in order.
#[cfg(unix)]
const LOCAL_SOCKETS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Host name sent in the header of network messages, resolved once.
fn local_hostname() -> &'static str {
    static HOSTNAME: OnceLock<String> = OnceLock::new();
    HOSTNAME.get_or_init(|| hostname().unwrap_or_else(|| "localhost".to_owned()))
}

#[cfg(unix)]
fn hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    let name = nix::unistd::gethostname(&mut buf).ok()?;
    name.to_str()
        .ok()
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

#[cfg(not(unix))]
fn hostname() -> Option<String> {
    std::env::var("COMPUTERNAME").ok()
}

/// Where a [`SyslogWriter`] delivers messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Local daemon on one of the well-known sockets.
    #[cfg(unix)]
    Local,
    #[cfg(unix)]
    Unix(PathBuf),
    #[cfg(unix)]
    Unixgram(PathBuf),
    Udp(String),
    Tcp(String),
}

impl Transport {
    pub fn parse(network: &str, address: &str) -> Result<Transport> {
        match network {
            "udp" | "udp4" | "udp6" => Ok(Transport::Udp(address.to_owned())),
            "tcp" | "tcp4" | "tcp6" => Ok(Transport::Tcp(address.to_owned())),
            #[cfg(unix)]
            "unix" => Ok(Transport::Unix(address.into())),
            #[cfg(unix)]
            "unixgram" => Ok(Transport::Unixgram(address.into())),
            _ => Err(LogError::UnsupportedNetwork(network.to_owned())),
        }
    }

    /// Local transports use the short header without hostname.
    pub fn is_local(&self) -> bool {
        match self {
            #[cfg(unix)]
            Transport::Local | Transport::Unix(_) | Transport::Unixgram(_) => true,
            Transport::Udp(_) | Transport::Tcp(_) => false,
        }
    }

    fn connect(&self) -> io::Result<Connection> {
        match self {
            #[cfg(unix)]
            Transport::Local => connect_local(),
            #[cfg(unix)]
            Transport::Unix(path) => Ok(Connection::Unix(UnixStream::connect(path)?)),
            #[cfg(unix)]
            Transport::Unixgram(path) => {
                let socket = UnixDatagram::unbound()?;
                socket.connect(path)?;
                Ok(Connection::Unixgram(socket))
            }
            Transport::Udp(address) => {
                let remote = address.to_socket_addrs()?.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "no address resolved")
                })?;
                let bind = if remote.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
                let socket = UdpSocket::bind(bind)?;
                socket.connect(remote)?;
                Ok(Connection::Udp(socket))
            }
            Transport::Tcp(address) => Ok(Connection::Tcp(TcpStream::connect(address.as_str())?)),
        }
    }
}

#[cfg(unix)]
fn connect_local() -> io::Result<Connection> {
    for path in LOCAL_SOCKETS.iter() {
        if let Ok(socket) = UnixDatagram::unbound() {
            if socket.connect(path).is_ok() {
                return Ok(Connection::Unixgram(socket));
            }
        }
        if let Ok(stream) = UnixStream::connect(path) {
            return Ok(Connection::Unix(stream));
        }
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        LogError::NoLocalSyslog,
    ))
}

enum Connection {
    #[cfg(unix)]
    Unix(UnixStream),
    #[cfg(unix)]
    Unixgram(UnixDatagram),
    Udp(UdpSocket),
    Tcp(TcpStream),
}

impl Connection {
    fn send(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            #[cfg(unix)]
            Connection::Unix(stream) => stream.write_all(line),
            #[cfg(unix)]
            Connection::Unixgram(socket) => socket.send(line).map(drop),
            Connection::Udp(socket) => socket.send(line).map(drop),
            Connection::Tcp(stream) => stream.write_all(line),
        }
    }
}

/// Connection to a syslog daemon or collector.
///
/// A failed write reconnects once and retries before giving up.
pub struct SyslogWriter {
    facility: Facility,
    tag: String,
    transport: Transport,
    conn: Mutex<Option<Connection>>,
}

impl SyslogWriter {
    /// Connects to the local syslog daemon.
    #[cfg(unix)]
    pub fn local(facility: Facility, tag: &str) -> Result<SyslogWriter> {
        Ok(SyslogWriter::open(Transport::Local, facility, tag)?)
    }

    #[cfg(not(unix))]
    pub fn local(_facility: Facility, _tag: &str) -> Result<SyslogWriter> {
        Err(LogError::NoLocalSyslog)
    }

    /// Connects to `address` over `network` (`unix`, `unixgram`, `udp`, `tcp`).
    pub fn dial(network: &str, address: &str, facility: Facility, tag: &str) -> Result<SyslogWriter> {
        let transport = Transport::parse(network, address)?;
        Ok(SyslogWriter::open(transport, facility, tag)?)
    }

    pub fn open(transport: Transport, facility: Facility, tag: &str) -> io::Result<SyslogWriter> {
        let conn = transport.connect()?;
        Ok(SyslogWriter {
            facility,
            tag: tag.to_owned(),
            transport,
            conn: Mutex::new(Some(conn)),
        })
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Renders one wire line, newline-terminated.
    pub fn format(&self, priority: Priority, msg: &str) -> String {
        let pri = priority.value(self.facility);
        let nl = if msg.ends_with('\n') { "" } else { "\n" };
        let now = utils::now();
        if self.transport.is_local() {
            format!(
                "<{}>{} {}[{}]: {}{}",
                pri,
                now.syslog_stamp(),
                self.tag,
                process::id(),
                msg,
                nl
            )
        } else {
            format!(
                "<{}>{} {} {}[{}]: {}{}",
                pri,
                now.rfc3339(),
                local_hostname(),
                self.tag,
                process::id(),
                msg,
                nl
            )
        }
    }

    pub fn write(&self, priority: Priority, msg: &str) -> io::Result<()> {
        let line = self.format(priority, msg);
        let mut conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(c) = conn.as_mut() {
            if c.send(line.as_bytes()).is_ok() {
                return Ok(());
            }
        }

        *conn = None;
        let mut fresh = self.transport.connect()?;
        fresh.send(line.as_bytes())?;
        *conn = Some(fresh);
        Ok(())
    }

    /// Drops the connection; the next write reconnects.
    pub fn close(&self) {
        *self.conn.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl std::fmt::Debug for SyslogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyslogWriter")
            .field("facility", &self.facility)
            .field("tag", &self.tag)
            .field("transport", &self.transport)
            .finish()
    }
}

impl RemoteSink for SyslogWriter {
    fn debug(&self, msg: &str) -> io::Result<()> {
        self.write(Priority::Debug, msg)
    }

    fn info(&self, msg: &str) -> io::Result<()> {
        self.write(Priority::Info, msg)
    }

    fn warning(&self, msg: &str) -> io::Result<()> {
        self.write(Priority::Warning, msg)
    }

    fn err(&self, msg: &str) -> io::Result<()> {
        self.write(Priority::Err, msg)
    }

    fn crit(&self, msg: &str) -> io::Result<()> {
        self.write(Priority::Crit, msg)
    }

    fn emerg(&self, msg: &str) -> io::Result<()> {
        self.write(Priority::Emerg, msg)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::time::Duration;

    use super::*;

    fn udp_server() -> (UdpSocket, String) {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        server
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let address = server.local_addr().unwrap().to_string();
        (server, address)
    }

    fn recv_line(server: &UdpSocket) -> String {
        let mut packet = [0u8; 2048];
        let n = server.recv(&mut packet).unwrap();
        String::from_utf8(packet[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_local_hostname() {
        let name = local_hostname();
        assert!(!name.is_empty());
        assert!(!name.contains(char::is_whitespace), "{:?}", name);
        assert!(std::ptr::eq(name, local_hostname()));
    }

    #[test]
    fn test_transport_parse() {
        assert_eq!(
            Transport::parse("udp", "127.0.0.1:514").unwrap(),
            Transport::Udp("127.0.0.1:514".to_owned())
        );
        assert_eq!(
            Transport::parse("tcp4", "logs:601").unwrap(),
            Transport::Tcp("logs:601".to_owned())
        );
        assert!(matches!(
            Transport::parse("sctp", "x"),
            Err(LogError::UnsupportedNetwork(_))
        ));
        assert!(!Transport::Udp(String::new()).is_local());
    }

    #[test]
    fn test_writer_network_format() {
        let (_server, address) = udp_server();
        let writer = SyslogWriter::dial("udp", &address, Facility::User, "app").unwrap();

        let line = writer.format(Priority::Warning, "disk low");
        assert!(line.starts_with("<12>"), "{}", line);
        assert!(line.contains(&format!(" {} app[", local_hostname())), "{}", line);
        assert!(
            line.ends_with(&format!("app[{}]: disk low\n", process::id())),
            "{}",
            line
        );

        let line = writer.format(Priority::Info, "already terminated\n");
        assert!(line.ends_with("]: already terminated\n"));
        assert!(!line.ends_with("\n\n"));
    }

    #[test]
    fn test_writer_udp_delivery() {
        let (server, address) = udp_server();
        let writer = SyslogWriter::dial("udp", &address, Facility::Daemon, "udptest").unwrap();
        assert_eq!(writer.facility(), Facility::Daemon);
        assert_eq!(writer.tag(), "udptest");

        writer.crit("x").unwrap();
        let line = recv_line(&server);
        // daemon (3 << 3) | crit (2)
        assert!(line.starts_with("<26>"), "{}", line);
        assert!(line.ends_with("]: x\n"), "{}", line);
    }

    #[test]
    fn test_writer_severity_methods() {
        let (server, address) = udp_server();
        let writer = SyslogWriter::dial("udp", &address, Facility::Kern, "sev").unwrap();

        writer.debug("d").unwrap();
        writer.info("i").unwrap();
        writer.warning("w").unwrap();
        writer.err("e").unwrap();
        writer.crit("c").unwrap();
        writer.emerg("m").unwrap();

        let prefixes: Vec<String> = (0..6)
            .map(|_| recv_line(&server)[..3].to_owned())
            .collect();
        assert_eq!(prefixes, vec!["<7>", "<6>", "<4>", "<3>", "<2>", "<0>"]);
    }

    #[test]
    fn test_writer_tcp_delivery() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();
        let writer = SyslogWriter::dial("tcp", &address, Facility::Local1, "tcptest").unwrap();

        writer.err("first").unwrap();
        writer.info("second").unwrap();

        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut first = String::new();
        reader.read_line(&mut first).unwrap();
        let mut second = String::new();
        reader.read_line(&mut second).unwrap();

        // local1 (17 << 3) | err (3), then | info (6)
        assert!(first.starts_with("<139>") && first.ends_with("]: first\n"), "{}", first);
        assert!(second.starts_with("<142>") && second.ends_with("]: second\n"), "{}", second);
    }

    #[cfg(unix)]
    #[test]
    fn test_writer_unixgram_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&path).unwrap();
        server
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let writer =
            SyslogWriter::dial("unixgram", path.to_str().unwrap(), Facility::User, "local").unwrap();
        assert!(writer.transport().is_local());

        writer.info("hello").unwrap();

        let mut packet = [0u8; 2048];
        let n = server.recv(&mut packet).unwrap();
        let line = String::from_utf8(packet[..n].to_vec()).unwrap();
        assert!(line.starts_with("<14>"), "{}", line);
        assert!(
            line.ends_with(&format!(" local[{}]: hello\n", process::id())),
            "{}",
            line
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_writer_reconnects_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&path).unwrap();
        server
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let writer =
            SyslogWriter::dial("unixgram", path.to_str().unwrap(), Facility::User, "re").unwrap();
        writer.close();
        writer.warning("again").unwrap();

        let mut packet = [0u8; 2048];
        let n = server.recv(&mut packet).unwrap();
        assert!(String::from_utf8_lossy(&packet[..n]).ends_with("]: again\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_writer_fails_when_daemon_gone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&path).unwrap();

        let writer =
            SyslogWriter::dial("unixgram", path.to_str().unwrap(), Facility::User, "gone").unwrap();
        drop(server);
        std::fs::remove_file(&path).unwrap();

        assert!(writer.info("lost").is_err());
        assert!(writer.info("lost again").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_dial_missing_socket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.sock");
        assert!(matches!(
            SyslogWriter::dial("unix", path.to_str().unwrap(), Facility::User, "x"),
            Err(LogError::Io(_))
        ));
    }
}
