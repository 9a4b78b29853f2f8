use std::error::Error;
use std::fmt;

// 생성 API가 2xx가 아닌 상태 코드를 반환함
#[derive(Debug)]
pub struct UpstreamStatusError(pub u16);

impl fmt::Display for UpstreamStatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "API 요청 실패: {}", self.0) // user-facing output
    }
}

impl Error for UpstreamStatusError {}
