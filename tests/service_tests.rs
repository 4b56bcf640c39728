//! Integration tests for ingest, snapshot and refresh over on-disk stores.

#![cfg(feature = "store")]
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use std::sync::{Arc, Barrier};

use choku_wrapped::save::content_hash;
use choku_wrapped::save::fixture::SlotBuilder;
use choku_wrapped::service::{BACKUP_PREFIX, backup_key};
use choku_wrapped::{BlobStore, DirBlobStore, IngestOutcome, RecordStore, ServiceError, WrappedStore};
use common::{TestStores, completed_save, reference_save, unfinished_save};

#[test]
fn test_ingest_outcomes() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = stores.service()?;
    let save = reference_save();
    let hash = content_hash(&save);

    assert_eq!(service.ingest(&save)?, IngestOutcome::Accepted(hash.clone()));
    assert_eq!(service.ingest(&save)?, IngestOutcome::Duplicate(hash.clone()));

    let bad = unfinished_save();
    assert_eq!(service.ingest(&bad)?, IngestOutcome::Invalid(content_hash(&bad)));

    assert_eq!(service.snapshot()?.num_submissions, 1);
    Ok(())
}

#[test]
fn test_snapshot_defaults_before_any_upload() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = stores.service()?;

    let stats = service.snapshot()?;
    assert_eq!(stats.num_submissions, 0);
    assert_eq!(stats.routes_count_max, 0);
    assert!(stats.save_data.is_none());
    Ok(())
}

#[test]
fn test_snapshot_for_attaches_record() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = stores.service()?;
    let save = reference_save();
    let hash = service.ingest(&save)?.hash().to_string();

    let stats = service.snapshot_for(&hash.to_ascii_lowercase())?.unwrap();
    let record = stats.save_data.as_ref().unwrap();
    assert_eq!(record.sha256_hash, hash);
    assert_eq!(record.num_topics_obtained, 2);
    assert_eq!(stats.num_submissions, 1);

    assert!(service.snapshot_for("0000")?.is_none());
    Ok(())
}

#[test]
fn test_records_survive_reopen() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    {
        let service = stores.service()?;
        service.ingest(&completed_save(1))?;
        service.ingest(&completed_save(2))?;
    }

    let service = stores.service()?;
    assert_eq!(service.snapshot()?.num_submissions, 2);
    assert_eq!(
        service.ingest(&completed_save(1))?,
        IngestOutcome::Duplicate(content_hash(&completed_save(1)))
    );
    Ok(())
}

#[test]
fn test_valid_uploads_are_backed_up() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = stores.service_with_backup()?;
    let save = completed_save(3);
    let hash = content_hash(&save);

    service.ingest(&save)?;
    service.ingest(&save)?;
    service.ingest(&unfinished_save())?;

    let backup = DirBlobStore::new(stores.backup_path())?;
    assert_eq!(backup.list(BACKUP_PREFIX)?, vec![backup_key(&hash)]);
    assert_eq!(backup.get(&backup_key(&hash))?, save);
    Ok(())
}

#[test]
fn test_refresh_rebuilds_records() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = stores.service_with_backup()?;
    for n in 0..3 {
        service.ingest(&completed_save(n))?;
    }

    // A stray file and a non-save backup are skipped.
    let backup = DirBlobStore::new(stores.backup_path())?;
    backup.put("notes.txt", b"ignore me")?;
    backup.put(&backup_key("JUNK"), b"not a save")?;

    let report = service.refresh()?;
    assert_eq!(report.restored, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(service.snapshot()?.num_submissions, 3);
    Ok(())
}

#[test]
fn test_refresh_drops_records_without_backup() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    {
        // Ingested before backups were configured.
        stores.service()?.ingest(&completed_save(10))?;
    }
    let service = stores.service_with_backup()?;
    service.ingest(&completed_save(11))?;
    assert_eq!(service.snapshot()?.num_submissions, 2);

    let report = service.refresh()?;
    assert_eq!(report.restored, 1);
    assert_eq!(service.snapshot()?.num_submissions, 1);
    Ok(())
}

#[test]
fn test_refresh_requires_backup() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = stores.service()?;
    service.ingest(&completed_save(4))?;

    assert!(matches!(service.refresh(), Err(ServiceError::BackupNotConfigured)));
    assert_eq!(service.snapshot()?.num_submissions, 1);
    Ok(())
}

#[test]
fn test_recompute_matches_stored_records() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let store = Arc::new(WrappedStore::open_or_init(stores.db_path())?);
    let service = choku_wrapped::WrappedService::new(store.clone(), store.clone());

    service.ingest(&SlotBuilder::completed().flag(4313).into_save())?;
    service.ingest(&SlotBuilder::completed().meter(9).into_save())?;

    let records = store.list_all()?;
    assert_eq!(records.len(), 2);
    let stats = service.recompute()?;
    assert_eq!(stats, choku_wrapped::aggregate(&records));
    // Raw meter values 0 and 9 read as 10 and 100.
    assert_eq!(stats.average_haruhi_meter, 55.0);
    Ok(())
}

#[test]
fn test_concurrent_ingest_keeps_latest_snapshot() -> anyhow::Result<()> {
    let stores = TestStores::new()?;
    let service = Arc::new(stores.service()?);

    let handles: Vec<_> = (0..8u8)
        .map(|n| {
            let service = service.clone();
            std::thread::spawn(move || service.ingest(&completed_save(20 + n)))
        })
        .collect();
    for handle in handles {
        assert!(matches!(handle.join().unwrap()?, IngestOutcome::Accepted(_)));
    }

    assert_eq!(service.snapshot()?.num_submissions, 8);
    Ok(())
}

#[test]
fn test_concurrent_identical_uploads() -> anyhow::Result<()> {
    const UPLOADERS: usize = 8;

    for round in 0..20u8 {
        let stores = TestStores::new()?;
        let service = Arc::new(stores.service_with_backup()?);
        let save = completed_save(round);
        let barrier = Arc::new(Barrier::new(UPLOADERS));

        let handles: Vec<_> = (0..UPLOADERS)
            .map(|_| {
                let (service, barrier, save) = (service.clone(), barrier.clone(), save.clone());
                std::thread::spawn(move || {
                    barrier.wait();
                    service.ingest(&save)
                })
            })
            .collect();
        let outcomes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Result<Vec<_>, _>>()?;

        let hash = content_hash(&save);
        let accepted = outcomes
            .iter()
            .filter(|o| **o == IngestOutcome::Accepted(hash.clone()))
            .count();
        let duplicates = outcomes
            .iter()
            .filter(|o| **o == IngestOutcome::Duplicate(hash.clone()))
            .count();
        assert_eq!(accepted, 1, "round {}: {:?}", round, outcomes);
        assert_eq!(duplicates, UPLOADERS - 1, "round {}: {:?}", round, outcomes);
        assert_eq!(service.snapshot()?.num_submissions, 1);

        let backup = DirBlobStore::new(stores.backup_path())?;
        assert_eq!(backup.list("")?, vec![backup_key(&hash)]);
        let restored = backup.get(&backup_key(&hash))?;
        assert_eq!(restored, save);
        assert_eq!(choku_wrapped::decode(&restored), choku_wrapped::decode(&save));
        assert_eq!(
            service.snapshot_for(&hash)?.and_then(|stats| stats.save_data),
            Some(choku_wrapped::decode(&save))
        );
    }
    Ok(())
}
