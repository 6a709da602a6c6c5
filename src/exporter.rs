// ==========================================
// 地铁失物资源规划 - CSV 导出
// ==========================================
// 职责: 月度预测导出（日级 / 站点级）
// ==========================================

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::forecast::DayForecast;
use crate::domain::types::ForecastTag;

#[derive(Debug, Serialize)]
struct DayRecord<'a> {
    date: NaiveDate,
    items: u32,
    staff_needed: u32,
    trucks_needed: u32,
    tag: ForecastTag,
    notes: &'a str,
}

#[derive(Debug, Serialize)]
struct StationRecord<'a> {
    date: NaiveDate,
    station: &'a str,
    items: u32,
    staff_needed: u32,
    trucks_needed: u32,
}

/// 导出日级预测
///
/// 表头: date,items,staff_needed,trucks_needed,tag,notes
pub fn export_days_csv<W: Write>(days: &[DayForecast], writer: W) -> ApiResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for day in days {
        wtr.serialize(DayRecord {
            date: day.date,
            items: day.items,
            staff_needed: day.staff_needed,
            trucks_needed: day.trucks_needed,
            tag: day.tag,
            notes: &day.notes,
        })?;
    }
    wtr.flush().map_err(|e| ApiError::ExportError(e.to_string()))?;
    debug!(rows = days.len(), "日级预测导出完成");
    Ok(())
}

/// 导出站点级预测（每日按件数降序）
///
/// 表头: date,station,items,staff_needed,trucks_needed
pub fn export_stations_csv<W: Write>(days: &[DayForecast], writer: W) -> ApiResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0usize;
    for day in days {
        for station in &day.stations {
            wtr.serialize(StationRecord {
                date: day.date,
                station: &station.name,
                items: station.items,
                staff_needed: station.staff_needed,
                trucks_needed: station.trucks_needed,
            })?;
            rows += 1;
        }
    }
    wtr.flush().map_err(|e| ApiError::ExportError(e.to_string()))?;
    debug!(rows, "站点级预测导出完成");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::StationForecast;
    use crate::domain::types::NoteKind;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    fn sample_day() -> DayForecast {
        DayForecast {
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            items: 64,
            staff_needed: 7,
            trucks_needed: 3,
            notes: "Festival Day - Expect high volume".to_string(),
            note_kind: NoteKind::Festival,
            tag: ForecastTag::High,
            stations: vec![
                StationForecast::new("RAJIV CHOWK", 40),
                StationForecast::new("NEW DELHI (Yellow & Airport Line)", 24),
            ],
        }
    }

    #[test]
    fn test_export_days_csv() {
        let mut buf = Vec::new();
        export_days_csv(&[sample_day()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,items,staff_needed,trucks_needed,tag,notes")
        );
        assert_eq!(
            lines.next(),
            Some("2025-03-15,64,7,3,high,Festival Day - Expect high volume")
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_stations_csv() {
        let mut buf = Vec::new();
        export_stations_csv(&[sample_day()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "date,station,items,staff_needed,trucks_needed");
        assert_eq!(lines[1], "2025-03-15,RAJIV CHOWK,40,4,2");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("NEW DELHI (Yellow & Airport Line)"));
    }

    #[test]
    fn test_export_write_failure_maps_to_export_error() {
        let result = export_days_csv(&[sample_day()], FailingWriter);
        match result {
            Err(ApiError::ExportError(msg)) => assert!(msg.contains("disk full")),
            other => panic!("unexpected: {:?}", other),
        }

        assert!(matches!(
            export_stations_csv(&[sample_day()], FailingWriter),
            Err(ApiError::ExportError(_))
        ));
    }
}
