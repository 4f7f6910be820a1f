use crate::models::acao::Acao;
use crate::utils::errors::AppResult;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AcaoRepository {
    pool: PgPool,
}

impl AcaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        empresa_id: Uuid,
        nome: String,
        tipo: String,
        municipio: String,
        uf: String,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
    ) -> AppResult<Acao> {
        // numero é sequencial por empresa
        let acao = sqlx::query_as::<_, Acao>(
            r#"
            INSERT INTO acoes (id, empresa_id, numero, nome, tipo, municipio, uf,
                               data_inicio, data_fim, status, created_at)
            VALUES ($1, $2,
                    (SELECT COALESCE(MAX(numero), 0) + 1 FROM acoes WHERE empresa_id = $2),
                    $3, $4, $5, $6, $7, $8, 'planned', $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(nome)
        .bind(tipo)
        .bind(municipio)
        .bind(uf)
        .bind(data_inicio)
        .bind(data_fim)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(acao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Acao>> {
        let acao = sqlx::query_as::<_, Acao>("SELECT * FROM acoes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(acao)
    }

    pub async fn find_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<Acao>> {
        let acoes = sqlx::query_as::<_, Acao>(
            "SELECT * FROM acoes WHERE empresa_id = $1 ORDER BY numero DESC",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(acoes)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        nome: String,
        tipo: String,
        municipio: String,
        uf: String,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
    ) -> AppResult<Acao> {
        let acao = sqlx::query_as::<_, Acao>(
            r#"
            UPDATE acoes
            SET nome = $2, tipo = $3, municipio = $4, uf = $5,
                data_inicio = $6, data_fim = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(tipo)
        .bind(municipio)
        .bind(uf)
        .bind(data_inicio)
        .bind(data_fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(acao)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<()> {
        sqlx::query("UPDATE acoes SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM acoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn link_caminhao(&self, acao_id: Uuid, caminhao_id: Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO acao_caminhoes (acao_id, caminhao_id)
            VALUES ($1, $2)
            ON CONFLICT (acao_id, caminhao_id) DO NOTHING
            "#,
        )
        .bind(acao_id)
        .bind(caminhao_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn unlink_caminhao(&self, acao_id: Uuid, caminhao_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM acao_caminhoes WHERE acao_id = $1 AND caminhao_id = $2")
            .bind(acao_id)
            .bind(caminhao_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Caminhões vinculados à ação, para ressincronizar status em lote
    /// após uma transição da ação.
    pub async fn caminhoes_vinculados(&self, acao_id: Uuid) -> AppResult<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> =
            sqlx::query_as("SELECT caminhao_id FROM acao_caminhoes WHERE acao_id = $1")
                .bind(acao_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
