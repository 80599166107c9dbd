//! 테스트용 업로더

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::services::uploads::{ImageUpload, ImageUploader, UploadConstraints, UploadError};

pub const STUB_URL_PREFIX: &str = "https://res.cloudinary.com/demo/image/upload";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum StubMode {
    #[default]
    Succeed,
    Fail,
    /// 성공 응답이지만 URL이 비어 있음
    BlankUrl,
}

/// 네트워크 없이 예측 가능한 URL을 돌려주는 업로더
#[derive(Default)]
pub struct StubUploader {
    calls: AtomicUsize,
    mode: StubMode,
}

impl StubUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항상 `UploadError::Provider`로 실패하는 업로더
    pub fn failing() -> Self {
        Self::with_mode(StubMode::Fail)
    }

    /// 업로드는 성공하지만 빈 URL을 돌려주는 업로더
    pub fn blank_url() -> Self {
        Self::with_mode(StubMode::BlankUrl)
    }

    fn with_mode(mode: StubMode) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            mode,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageUploader for StubUploader {
    async fn store(&self, image: ImageUpload, constraints: &UploadConstraints) -> Result<String, UploadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        match self.mode {
            StubMode::Fail => Err(UploadError::Provider("stub failure".to_string())),
            StubMode::BlankUrl => Ok("  ".to_string()),
            StubMode::Succeed => {
                let format = constraints.check(&image)?;
                Ok(format!("{}/{}/{}.{}", STUB_URL_PREFIX, constraints.folder, call, format))
            }
        }
    }
}
