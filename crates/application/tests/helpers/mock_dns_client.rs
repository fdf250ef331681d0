use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsClient;
use ferrous_lookup_domain::{
    DnsRecordData, DomainError, QueryType, RawDnsError, ResolverPayload,
};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DEFAULT_SERVERS: &[&str] = &["8.8.8.8:53", "1.1.1.1:53"];

#[derive(Clone)]
struct ScriptedResponse {
    result: Result<ResolverPayload, RawDnsError>,
    delay: Duration,
}

#[derive(Default)]
struct InFlight {
    current: HashMap<String, usize>,
    max_per_name: HashMap<String, usize>,
    total: usize,
    max_total: usize,
}

/// Scripted DNS client. Unscripted forward queries answer `ENODATA`,
/// unscripted reverse queries answer `ENOTFOUND`.
#[derive(Clone)]
pub struct MockDnsClient {
    forward: Arc<Mutex<HashMap<(String, QueryType), ScriptedResponse>>>,
    reverse: Arc<Mutex<HashMap<IpAddr, ScriptedResponse>>>,
    servers: Arc<Mutex<Vec<String>>>,
    reconfigurations: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(String, QueryType)>>>,
    in_flight: Arc<Mutex<InFlight>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self {
            forward: Arc::new(Mutex::new(HashMap::new())),
            reverse: Arc::new(Mutex::new(HashMap::new())),
            servers: Arc::new(Mutex::new(
                DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect(),
            )),
            reconfigurations: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(Mutex::new(InFlight::default())),
        }
    }

    pub fn set_records(&self, name: &str, query_type: QueryType, records: Vec<DnsRecordData>) {
        self.set_payload(name, query_type, ResolverPayload::Many(records));
    }

    pub fn set_payload(&self, name: &str, query_type: QueryType, payload: ResolverPayload) {
        self.script_forward(name, query_type, Ok(payload), Duration::ZERO);
    }

    pub fn set_error(&self, name: &str, query_type: QueryType, code: &str) {
        let error = RawDnsError::new(
            code,
            query_type.syscall(),
            format!("{} {code} {name}", query_type.syscall()),
        );
        self.script_forward(name, query_type, Err(error), Duration::ZERO);
    }

    pub fn set_delayed_records(
        &self,
        name: &str,
        query_type: QueryType,
        records: Vec<DnsRecordData>,
        delay: Duration,
    ) {
        self.script_forward(name, query_type, Ok(ResolverPayload::Many(records)), delay);
    }

    pub fn set_hostnames(&self, ip: &str, hostnames: &[&str]) {
        let records = hostnames.iter().map(|h| DnsRecordData::text(*h)).collect();
        self.reverse.lock().unwrap().insert(
            ip.parse().unwrap(),
            ScriptedResponse {
                result: Ok(ResolverPayload::Many(records)),
                delay: Duration::ZERO,
            },
        );
    }

    pub fn set_reverse_error(&self, ip: &str, code: &str) {
        self.reverse.lock().unwrap().insert(
            ip.parse().unwrap(),
            ScriptedResponse {
                result: Err(RawDnsError::new(code, "getHostByAddr", format!("getHostByAddr {code} {ip}"))),
                delay: Duration::ZERO,
            },
        );
    }

    pub fn reconfigurations(&self) -> usize {
        self.reconfigurations.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, QueryType)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queries_for(&self, name: &str) -> Vec<QueryType> {
        self.queries()
            .into_iter()
            .filter(|(queried, _)| queried == name)
            .map(|(_, query_type)| query_type)
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.in_flight.lock().unwrap().max_total
    }

    pub fn max_in_flight_for(&self, name: &str) -> usize {
        self.in_flight
            .lock()
            .unwrap()
            .max_per_name
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    fn script_forward(
        &self,
        name: &str,
        query_type: QueryType,
        result: Result<ResolverPayload, RawDnsError>,
        delay: Duration,
    ) {
        self.forward
            .lock()
            .unwrap()
            .insert((name.to_string(), query_type), ScriptedResponse { result, delay });
    }

    async fn respond(
        &self,
        name: String,
        query_type: QueryType,
        scripted: ScriptedResponse,
    ) -> Result<ResolverPayload, RawDnsError> {
        self.queries.lock().unwrap().push((name.clone(), query_type));
        self.enter(&name);

        // Yield at least once so sibling queries can overlap.
        tokio::time::sleep(scripted.delay.max(Duration::from_millis(1))).await;

        self.leave(&name);
        scripted.result
    }

    fn enter(&self, name: &str) {
        let mut in_flight = self.in_flight.lock().unwrap();
        in_flight.total += 1;
        in_flight.max_total = in_flight.max_total.max(in_flight.total);
        let current = {
            let count = in_flight.current.entry(name.to_string()).or_insert(0);
            *count += 1;
            *count
        };
        let max = in_flight.max_per_name.entry(name.to_string()).or_insert(0);
        *max = (*max).max(current);
    }

    fn leave(&self, name: &str) {
        let mut in_flight = self.in_flight.lock().unwrap();
        in_flight.total -= 1;
        if let Some(count) = in_flight.current.get_mut(name) {
            *count -= 1;
        }
    }
}

impl Default for MockDnsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn forward_query(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<ResolverPayload, RawDnsError> {
        let scripted = self
            .forward
            .lock()
            .unwrap()
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or_else(|| ScriptedResponse {
                result: Err(RawDnsError::new(
                    "ENODATA",
                    query_type.syscall(),
                    format!("{} ENODATA {name}", query_type.syscall()),
                )),
                delay: Duration::ZERO,
            });

        self.respond(name.to_string(), query_type, scripted).await
    }

    async fn reverse_query(&self, ip: IpAddr) -> Result<Vec<String>, RawDnsError> {
        let scripted = self
            .reverse
            .lock()
            .unwrap()
            .get(&ip)
            .cloned()
            .unwrap_or_else(|| ScriptedResponse {
                result: Err(RawDnsError::new(
                    "ENOTFOUND",
                    "getHostByAddr",
                    format!("getHostByAddr ENOTFOUND {ip}"),
                )),
                delay: Duration::ZERO,
            });

        let payload = self
            .respond(ip.to_string(), QueryType::PTR, scripted)
            .await?;

        Ok(payload
            .into_records()
            .into_iter()
            .map(|record| record.primary_value())
            .collect())
    }

    fn reconfigure(&self, servers: &[SocketAddr]) -> Result<(), DomainError> {
        self.reconfigurations.fetch_add(1, Ordering::SeqCst);
        let mut current = self.servers.lock().unwrap();
        *current = if servers.is_empty() {
            DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect()
        } else {
            servers.iter().map(|s| s.to_string()).collect()
        };
        Ok(())
    }

    fn servers(&self) -> Vec<String> {
        self.servers.lock().unwrap().clone()
    }
}
