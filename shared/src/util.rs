use chrono::{DateTime, SubsecRound, Utc};

/// 当前 UTC 时间，截断到毫秒
///
/// 与数据文件中 `timestamp` 的精度一致，保证写入后再读取得到相同的值。
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_utc_has_millisecond_precision() {
        let now = now_utc();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
        assert!((Utc::now() - now).num_seconds() < 1);
    }
}
