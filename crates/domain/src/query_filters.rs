use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::OnceLock;

const PRIVATE_RANGES: &[&str] = &[
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "169.254.0.0/16",
    "127.0.0.0/8",
    "100.64.0.0/10",
    "fc00::/7",
    "fe80::/10",
    "::1/128",
];

fn private_networks() -> &'static [IpNetwork] {
    static NETWORKS: OnceLock<Vec<IpNetwork>> = OnceLock::new();
    NETWORKS.get_or_init(|| {
        PRIVATE_RANGES
            .iter()
            .filter_map(|cidr| cidr.parse().ok())
            .collect()
    })
}

pub struct PrivateIpFilter;

impl PrivateIpFilter {
    pub fn is_private_ip(ip: &IpAddr) -> bool {
        private_networks()
            .iter()
            .any(|network| network.contains(*ip))
    }
}
