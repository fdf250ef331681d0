#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

type Zone = Arc<Mutex<HashMap<(String, RecordType), (ResponseCode, Vec<RData>)>>>;

/// UDP DNS server answering from a scripted zone.
///
/// Names with no entry at all answer NXDOMAIN; a known name asked for a
/// missing type answers NOERROR with no records.
pub struct MockDnsServer {
    addr: SocketAddr,
    zone: Zone,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let zone: Zone = Arc::new(Mutex::new(HashMap::new()));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let served = Arc::clone(&zone);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&served, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            zone,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn answer(&self, name: &str, record_type: RecordType, records: Vec<RData>) {
        self.zone
            .lock()
            .unwrap()
            .insert((normalize(name), record_type), (ResponseCode::NoError, records));
    }

    pub fn fail(&self, name: &str, record_type: RecordType, code: ResponseCode) {
        self.zone
            .lock()
            .unwrap()
            .insert((normalize(name), record_type), (code, Vec::new()));
    }

    fn build_response(zone: &Zone, query: &[u8]) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();
        let name = normalize(&question.name().to_utf8());

        let (code, records) = {
            let zone = zone.lock().unwrap();
            match zone.get(&(name.clone(), question.query_type())) {
                Some((code, records)) => (*code, records.clone()),
                None if zone.keys().any(|(known, _)| *known == name) => {
                    (ResponseCode::NoError, Vec::new())
                }
                None => (ResponseCode::NXDomain, Vec::new()),
            }
        };

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_response_code(code)
            .add_query(question.clone());

        for rdata in records {
            response.add_answer(Record::from_rdata(question.name().clone(), 60, rdata));
        }

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

pub fn fqdn(name: &str) -> Name {
    Name::from_ascii(format!("{}.", normalize(name))).unwrap()
}
