//! End-to-end test of `RemoteSource` against an in-process TCP fixture
//! serving an `InMemorySource`.

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::net::TcpListener;
use vitrine_core::{ContactInfo, DataSource, InMemorySource, ReservationRequest, ReservationStatus};
use vitrine_net::frame::{read_frame, write_frame};
use vitrine_net::{RemoteSource, Request, Response};

async fn dispatch(source: &InMemorySource, request: Request) -> Response {
    let result = match request {
        Request::GetSpaces => source
            .get_spaces()
            .await
            .map(|spaces| Response::Spaces { spaces }),
        Request::GetSpace { id } => source
            .get_space(&id)
            .await
            .map(|space| Response::Space { space }),
        Request::GetStores => source
            .get_stores()
            .await
            .map(|stores| Response::Stores { stores }),
        Request::GetReservations => source
            .get_reservations()
            .await
            .map(|reservations| Response::Reservations { reservations }),
        Request::Reserve { request } => source
            .reserve_space(request)
            .await
            .map(|reservation| Response::Reserved { reservation }),
        Request::Cancel { id } => source
            .cancel_reservation(id)
            .await
            .map(|reservation| Response::Cancelled { reservation }),
    };
    result.unwrap_or_else(|e| Response::Error {
        message: e.to_string(),
    })
}

/// Bind a fixture service on an ephemeral port and serve forever
async fn start_fixture() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let source = Arc::new(InMemorySource::seeded());

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let source = source.clone();
            tokio::spawn(async move {
                let (mut reader, mut writer) = stream.split();
                let Ok(request) = read_frame::<Request, _>(&mut reader).await else {
                    return;
                };
                let response = dispatch(&source, request).await;
                let _ = write_frame(&mut writer, &response).await;
            });
        }
    });

    addr
}

fn valid_request(space_id: &str, total: u64) -> ReservationRequest {
    ReservationRequest {
        space_ids: vec![space_id.to_string()],
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        total_price: total,
        contact: ContactInfo {
            company_name: "Tech Solutions LTDA".into(),
            contact_name: "Maria Silva".into(),
            email: "maria@techsolutions.com".into(),
            phone: "(92) 98765-4321".into(),
        },
        notes: None,
    }
}

#[tokio::test]
async fn test_catalog_fetch_over_the_wire() {
    let addr = start_fixture().await;
    let client = RemoteSource::new(addr);

    let spaces = client.get_spaces().await.unwrap();
    assert_eq!(spaces, vitrine_core::seed::spaces());

    let stores = client.get_stores().await.unwrap();
    assert_eq!(stores, vitrine_core::seed::stores());

    let space = client.get_space("space-001").await.unwrap();
    assert_eq!(space.name, "Premium Endcap");
}

#[tokio::test]
async fn test_reserve_and_cancel_over_the_wire() {
    let addr = start_fixture().await;
    let client = RemoteSource::new(addr);

    let before = client.get_reservations().await.unwrap().len();

    let reservation = client
        .reserve_space(valid_request("space-001", 8000))
        .await
        .unwrap();
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.total_price, 8000);

    let after = client.get_reservations().await.unwrap();
    assert_eq!(after.len(), before + 1);

    let cancelled = client.cancel_reservation(reservation.id).await.unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
}

#[tokio::test]
async fn test_service_rejection_surfaces_as_transport_error() {
    let addr = start_fixture().await;
    let client = RemoteSource::new(addr);

    let err = client.get_space("space-999").await.unwrap_err();
    match err {
        vitrine_core::Error::Transport(msg) => assert!(msg.contains("space-999")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on this port
    let client = RemoteSource::from_addr("127.0.0.1:1").unwrap();
    let err = client.get_spaces().await.unwrap_err();
    assert!(matches!(err, vitrine_core::Error::Transport(_)));
}
