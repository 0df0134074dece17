//! DataSUS FTP access for SIH "AIH Reduzida" files.

pub mod dbc;

use std::io::Cursor;

use async_trait::async_trait;
use futures::AsyncReadExt;
use suppaftp::AsyncFtpStream;

use crate::errors::ExtractResult;
use crate::models::batch::RecordBatch;
use crate::models::period::Period;
use crate::models::states::StateInfo;

pub const DATASUS_FTP_SERVER: &str = "ftp.datasus.gov.br:21";
pub const SIH_DADOS_DIR: &str = "/dissemin/publicos/SIHSUS/200801_/Dados/";

/// Source of one competence month of records for one state.
///
/// The production implementation is [`SihFetcher`]; tests substitute a
/// scripted source to exercise the task runner without a network.
#[async_trait]
pub trait PeriodSource: Send {
    async fn fetch(&mut self, state: &StateInfo, period: Period) -> ExtractResult<RecordBatch>;
}

/// DBC filename for the reduced (RD) record type, e.g. `RDSP2504.dbc`.
pub fn rd_filename(state: &StateInfo, period: Period) -> String {
    format!("RD{}{}.dbc", state.uf.to_uppercase(), period.yymm())
}

/// FTP fetcher for SIH files.
///
/// Keeps one anonymous connection open across tasks; a connection that saw
/// a failed transfer is closed instead of reused, so the next task starts
/// from a fresh login.
pub struct SihFetcher {
    server: String,
    dados_dir: String,
    connection: Option<AsyncFtpStream>,
}

impl SihFetcher {
    pub fn new_datasus() -> Self {
        Self {
            server: DATASUS_FTP_SERVER.to_string(),
            dados_dir: SIH_DADOS_DIR.to_string(),
            connection: None,
        }
    }

    pub fn new(server: String, dados_dir: String) -> Self {
        Self {
            server,
            dados_dir,
            connection: None,
        }
    }

    async fn connect(&self) -> ExtractResult<AsyncFtpStream> {
        log::debug!("connecting to {}", self.server);
        let mut ftp = AsyncFtpStream::connect(self.server.as_str()).await?;
        ftp.login("anonymous", "anonymous").await?;
        ftp.cwd(&self.dados_dir).await?;
        Ok(ftp)
    }

    /// Close any cached connection.
    pub async fn close(&mut self) {
        if let Some(mut ftp) = self.connection.take() {
            if let Err(e) = ftp.quit().await {
                log::warn!("error closing FTP connection: {e}");
            }
        }
    }

    async fn download(&mut self, filename: &str) -> ExtractResult<Vec<u8>> {
        let mut conn = match self.connection.take() {
            Some(conn) => conn,
            None => self.connect().await?,
        };

        match Self::retrieve(&mut conn, filename).await {
            Ok(bytes) => {
                self.connection = Some(conn);
                Ok(bytes)
            }
            Err(e) => {
                if let Err(quit_err) = conn.quit().await {
                    log::warn!("error closing FTP connection after failure: {quit_err}");
                }
                Err(e)
            }
        }
    }

    async fn retrieve(conn: &mut AsyncFtpStream, filename: &str) -> ExtractResult<Vec<u8>> {
        let mut stream = conn.retr_as_stream(filename).await?;
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).await?;
        conn.finalize_retr_stream(stream).await?;
        Ok(bytes)
    }
}

#[async_trait]
impl PeriodSource for SihFetcher {
    async fn fetch(&mut self, state: &StateInfo, period: Period) -> ExtractResult<RecordBatch> {
        let filename = rd_filename(state, period);
        log::debug!("fetching {} from {}", filename, self.dados_dir);

        let dbc_bytes = self.download(&filename).await?;
        let dbf_bytes = dbc::decompress_dbc(Cursor::new(dbc_bytes))?;
        dbc::read_dbf_batch(Cursor::new(dbf_bytes))
    }
}
