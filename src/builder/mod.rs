mod qr;

pub use qr::{Module, QR};

use tracing::debug;

use crate::common::{
    codec::{analyze, encode},
    ec::{blockify, interleave_blocks},
    error::QRResult,
    mask::{find_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
};

/// Collects the data and optional overrides of a symbol. Anything left unset is chosen during
/// [`QRBuilder::build`].
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: Option<ECLevel>,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: None, mask: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = Some(ec_level);
        self
    }

    pub fn unset_ec_level(&mut self) -> &mut Self {
        self.ec_level = None;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        let ver = self.version.map_or("None".to_string(), |v| v.to_string());
        let ecl = self.ec_level.map_or("None".to_string(), |l| format!("{l:?}"));
        let mask = self.mask.map_or("None".to_string(), |m| (*m).to_string());
        format!("{{ Version: {ver}, Ec level: {ecl}, Mask: {mask} }}")
    }
}


impl QRBuilder<'_> {
    /// Runs every step up to data placement. The returned symbol carries no mask and no format
    /// info yet.
    pub(crate) fn build_unmasked(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());

        let (mode, ver, ecl) = analyze(self.data, self.ec_level, self.version)?;

        debug!("Encoding data");
        let encoded = encode(self.data, mode, ver, ecl);

        debug!("Computing ecc & interleaving");
        let blocks = blockify(encoded.data(), ver, ecl);
        let payload = interleave_blocks(&blocks);

        debug!("Drawing symbol");
        let mut qr = QR::new(ver, ecl, mode);
        qr.draw_function_patterns();
        qr.reserve_info_areas();
        qr.draw_payload(&payload);
        Ok(qr)
    }

    pub fn build(&self) -> QRResult<QR> {
        let mut qr = self.build_unmasked()?;

        let mask = match self.mask {
            Some(m) => {
                debug!("Applying forced mask {}", *m);
                m
            }
            None => find_best_mask(&qr),
        };
        qr.commit_mask(mask);
        qr.draw_format_and_version_info();

        debug!(
            "QR generated: {}, dark modules {}/{}",
            qr.metadata(),
            qr.count_dark_modules(),
            qr.width() * qr.width()
        );
        Ok(qr)
    }
}
