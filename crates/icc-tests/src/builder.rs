//! Synthetic profile construction
//!
//! Assembles ICC profile bytes tag by tag so tests can exercise the reader
//! without shipping binary fixtures.

/// sRGB colorants adapted to D50, raw s15.16 (red, green, blue)
pub const SRGB_COLORANTS: [[i32; 3]; 3] = [
    [0x0000_6FA2, 0x0000_38F5, 0x0000_0390],
    [0x0000_6296, 0x0000_B786, 0x0000_18DA],
    [0x0000_24A0, 0x0000_0F84, 0x0000_B6CF],
];

/// D50 illuminant as stored in most v4 headers
pub const D50_ILLUMINANT: [i32; 3] = [0x0000_F6D6, 0x0001_0000, 0x0000_D32D];

/// Tone response curve body
#[derive(Debug, Clone, PartialEq)]
pub enum Trc {
    /// 'para' with an arbitrary function type and raw s15.16 parameters
    Parametric { function_type: u16, params: Vec<i32> },
    /// 'curv' with raw u16 samples
    Sampled(Vec<u16>),
}

impl Trc {
    /// 'para' type 0 with a single exponent
    pub fn gamma(gamma: f64) -> Self {
        Self::Parametric {
            function_type: 0,
            params: vec![to_s15_16(gamma)],
        }
    }

    /// 'curv' sampling `x^gamma` at `len` points
    pub fn sampled_gamma(len: usize, gamma: f64) -> Self {
        let last = (len.max(2) - 1) as f64;
        Self::Sampled(
            (0..len)
                .map(|i| ((i as f64 / last).powf(gamma) * 65535.0).round() as u16)
                .collect(),
        )
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Parametric {
                function_type,
                params,
            } => {
                let mut body = type_header(b"para");
                body.extend_from_slice(&function_type.to_be_bytes());
                body.extend_from_slice(&[0, 0]);
                for p in params {
                    body.extend_from_slice(&p.to_be_bytes());
                }
                body
            }
            Self::Sampled(samples) => {
                let mut body = type_header(b"curv");
                body.extend_from_slice(&(samples.len() as u32).to_be_bytes());
                for s in samples {
                    body.extend_from_slice(&s.to_be_bytes());
                }
                body
            }
        }
    }
}

/// Nearest s15.16 encoding of `v`
pub fn to_s15_16(v: f64) -> i32 {
    (v * 65536.0).round() as i32
}

fn type_header(sig: &[u8; 4]) -> Vec<u8> {
    let mut body = sig.to_vec();
    body.extend_from_slice(&[0; 4]);
    body
}

/// 'XYZ ' tag body
pub fn xyz_tag(raw: [i32; 3]) -> Vec<u8> {
    let mut body = type_header(b"XYZ ");
    for c in raw {
        body.extend_from_slice(&c.to_be_bytes());
    }
    body
}

/// v2 'desc' tag body, with the ASCII count including the NUL
pub fn desc_tag(text: &str) -> Vec<u8> {
    let mut body = type_header(b"desc");
    body.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
    body.extend_from_slice(text.as_bytes());
    body.push(0);
    // Unicode and ScriptCode sections, both empty
    body.extend_from_slice(&[0; 8]);
    body.extend_from_slice(&[0; 3]);
    body.extend_from_slice(&[0; 67]);
    body
}

/// 'mluc' tag body, records given as (language, country, text)
pub fn mluc_tag(records: &[(&[u8; 2], &[u8; 2], &str)]) -> Vec<u8> {
    let mut body = type_header(b"mluc");
    body.extend_from_slice(&(records.len() as u32).to_be_bytes());
    body.extend_from_slice(&12u32.to_be_bytes());

    let encoded: Vec<Vec<u8>> = records
        .iter()
        .map(|(_, _, text)| text.encode_utf16().flat_map(u16::to_be_bytes).collect())
        .collect();
    let mut offset = 16 + 12 * records.len() as u32;
    for ((lang, country, _), text) in records.iter().zip(&encoded) {
        body.extend_from_slice(*lang);
        body.extend_from_slice(*country);
        body.extend_from_slice(&(text.len() as u32).to_be_bytes());
        body.extend_from_slice(&offset.to_be_bytes());
        offset += text.len() as u32;
    }
    for text in &encoded {
        body.extend_from_slice(text);
    }
    body
}

/// Builder for complete profile byte streams
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    device_class: [u8; 4],
    color_space: [u8; 4],
    pcs: [u8; 4],
    version: u32,
    rendering_intent: u32,
    illuminant: [i32; 3],
    magic: [u8; 4],
    tags: Vec<([u8; 4], Vec<u8>)>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self {
            device_class: *b"mntr",
            color_space: *b"RGB ",
            pcs: *b"XYZ ",
            version: 0x0430_0000,
            rendering_intent: 0,
            illuminant: D50_ILLUMINANT,
            magic: *b"acsp",
            tags: Vec::new(),
        }
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display profile with sRGB colorants and the same TRC on every channel
    pub fn matrix_trc(trc: Trc) -> Self {
        Self::new()
            .colorants(SRGB_COLORANTS)
            .trcs([trc.clone(), trc.clone(), trc])
    }

    pub fn device_class(mut self, sig: &[u8; 4]) -> Self {
        self.device_class = *sig;
        self
    }

    pub fn color_space(mut self, sig: &[u8; 4]) -> Self {
        self.color_space = *sig;
        self
    }

    pub fn pcs(mut self, sig: &[u8; 4]) -> Self {
        self.pcs = *sig;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn rendering_intent(mut self, intent: u32) -> Self {
        self.rendering_intent = intent;
        self
    }

    pub fn illuminant(mut self, raw: [i32; 3]) -> Self {
        self.illuminant = raw;
        self
    }

    pub fn magic(mut self, magic: &[u8; 4]) -> Self {
        self.magic = *magic;
        self
    }

    /// Append a raw tag body
    pub fn tag(mut self, sig: &[u8; 4], body: Vec<u8>) -> Self {
        self.tags.push((*sig, body));
        self
    }

    /// Drop every tag with this signature
    pub fn without_tag(mut self, sig: &[u8; 4]) -> Self {
        self.tags.retain(|(s, _)| s != sig);
        self
    }

    pub fn colorants(self, raw: [[i32; 3]; 3]) -> Self {
        let [r, g, b] = raw;
        self.tag(b"rXYZ", xyz_tag(r))
            .tag(b"gXYZ", xyz_tag(g))
            .tag(b"bXYZ", xyz_tag(b))
    }

    pub fn trcs(self, [r, g, b]: [Trc; 3]) -> Self {
        self.tag(b"rTRC", r.encode())
            .tag(b"gTRC", g.encode())
            .tag(b"bTRC", b.encode())
    }

    pub fn description(self, text: &str) -> Self {
        self.tag(b"desc", desc_tag(text))
    }

    /// Header, tag table and bodies, laid out in insertion order
    pub fn build(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(128);
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(b"oxic");
        data.extend_from_slice(&self.version.to_be_bytes());
        data.extend_from_slice(&self.device_class);
        data.extend_from_slice(&self.color_space);
        data.extend_from_slice(&self.pcs);
        for field in [2024u16, 1, 2, 3, 4, 5] {
            data.extend_from_slice(&field.to_be_bytes());
        }
        data.extend_from_slice(&self.magic);
        data.extend_from_slice(b"APPL");
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(b"oxic");
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(&self.rendering_intent.to_be_bytes());
        for c in self.illuminant {
            data.extend_from_slice(&c.to_be_bytes());
        }
        data.extend_from_slice(b"oxic");
        data.resize(128, 0);

        data.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());
        let mut offset = 132 + 12 * self.tags.len() as u32;
        for (sig, body) in &self.tags {
            data.extend_from_slice(sig);
            data.extend_from_slice(&offset.to_be_bytes());
            data.extend_from_slice(&(body.len() as u32).to_be_bytes());
            offset += body.len() as u32;
        }
        for (_, body) in &self.tags {
            data.extend_from_slice(body);
        }

        let size = data.len() as u32;
        data[0..4].copy_from_slice(&size.to_be_bytes());
        data
    }
}
