/// Hand-assembled DNS replies, uncompressed, for parser and transport tests.
#[derive(Clone, Default)]
pub struct ReplyBuilder {
    id: u16,
    authoritative: bool,
    truncated: bool,
    question: Option<(String, u16)>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
}

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_SOA: u16 = 6;

impl ReplyBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn authoritative(mut self) -> Self {
        self.authoritative = true;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn question(mut self, name: &str, record_type: u16) -> Self {
        self.question = Some((name.to_string(), record_type));
        self
    }

    pub fn answer_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.answers.push(record(zone, TYPE_NS, &encode_name(nameserver)));
        self
    }

    pub fn answer_a(mut self, name: &str, ip: [u8; 4]) -> Self {
        self.answers.push(record(name, TYPE_A, &ip));
        self
    }

    pub fn authority_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.authorities
            .push(record(zone, TYPE_NS, &encode_name(nameserver)));
        self
    }

    pub fn authority_soa(mut self, zone: &str) -> Self {
        let mut rdata = encode_name(&format!("ns1.{}", zone));
        rdata.extend(encode_name(&format!("hostmaster.{}", zone)));
        for value in [2024010101u32, 7200, 3600, 1209600, 300] {
            rdata.extend_from_slice(&value.to_be_bytes());
        }
        self.authorities.push(record(zone, TYPE_SOA, &rdata));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut flags: u8 = 0x80;
        if self.authoritative {
            flags |= 0x04;
        }
        if self.truncated {
            flags |= 0x02;
        }

        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.push(flags);
        out.push(0x00);
        out.extend_from_slice(&(self.question.is_some() as u16).to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authorities.len() as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());

        if let Some((name, record_type)) = &self.question {
            out.extend(encode_name(name));
            out.extend_from_slice(&record_type.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
        }
        for rr in self.answers.iter().chain(self.authorities.iter()) {
            out.extend_from_slice(rr);
        }
        out
    }

    /// The same reply carrying `id`.
    pub fn build_with_id(&self, id: u16) -> Vec<u8> {
        Self {
            id,
            ..self.clone()
        }
        .build()
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn record(name: &str, record_type: u16, rdata: &[u8]) -> Vec<u8> {
    let mut out = encode_name(name);
    out.extend_from_slice(&record_type.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&3600u32.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}
