use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

use super::ReplyBuilder;

/// Loopback nameserver answering every question with a canned reply.
///
/// The UDP and TCP replies are configured separately so truncation
/// fallback can be observed.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(udp_reply: ReplyBuilder, tcp_reply: Option<ReplyBuilder>) -> Self {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = udp.local_addr().unwrap();
        let tcp = match tcp_reply {
            Some(_) => Some(TcpListener::bind(addr).await.unwrap()),
            None => None,
        };

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if len < 2 {
                                continue;
                            }
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let id = u16::from_be_bytes([buf[0], buf[1]]);
                            let _ = udp.send_to(&udp_reply.build_with_id(id), peer).await;
                        }
                    }
                    accepted = accept(&tcp) => {
                        if let (Some((mut stream, _)), Some(reply)) = (accepted, tcp_reply.as_ref()) {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                continue;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() || query.len() < 2 {
                                continue;
                            }
                            let id = u16::from_be_bytes([query[0], query[1]]);
                            let bytes = reply.build_with_id(id);
                            let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                            let _ = stream.write_all(&bytes).await;
                        }
                    }
                }
            }
        });

        Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }
}

async fn accept(
    listener: &Option<TcpListener>,
) -> Option<(tokio::net::TcpStream, SocketAddr)> {
    match listener {
        Some(l) => l.accept().await.ok(),
        None => std::future::pending().await,
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
