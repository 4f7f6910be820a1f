use crate::models::manutencao::Manutencao;
use crate::utils::errors::AppResult;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ManutencaoRepository {
    pool: PgPool,
}

impl ManutencaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        empresa_id: Uuid,
        caminhao_id: Uuid,
        titulo: String,
        tipo: String,
        status: &str,
        data_prevista: Option<NaiveDate>,
        data_conclusao: Option<NaiveDate>,
        custo_estimado: Option<Decimal>,
        custo_real: Option<Decimal>,
        pagamento: &str,
    ) -> AppResult<Manutencao> {
        let manutencao = sqlx::query_as::<_, Manutencao>(
            r#"
            INSERT INTO manutencoes (id, empresa_id, caminhao_id, titulo, tipo, status,
                                     data_prevista, data_conclusao, custo_estimado,
                                     custo_real, pagamento, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(caminhao_id)
        .bind(titulo)
        .bind(tipo)
        .bind(status)
        .bind(data_prevista)
        .bind(data_conclusao)
        .bind(custo_estimado)
        .bind(custo_real)
        .bind(pagamento)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(manutencao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manutencao>> {
        let manutencao =
            sqlx::query_as::<_, Manutencao>("SELECT * FROM manutencoes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(manutencao)
    }

    pub async fn find_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<Manutencao>> {
        let manutencoes = sqlx::query_as::<_, Manutencao>(
            "SELECT * FROM manutencoes WHERE empresa_id = $1 ORDER BY created_at DESC",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(manutencoes)
    }

    pub async fn find_by_caminhao(&self, caminhao_id: Uuid) -> AppResult<Vec<Manutencao>> {
        let manutencoes = sqlx::query_as::<_, Manutencao>(
            "SELECT * FROM manutencoes WHERE caminhao_id = $1 ORDER BY created_at DESC",
        )
        .bind(caminhao_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(manutencoes)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        titulo: String,
        tipo: String,
        status: &str,
        data_prevista: Option<NaiveDate>,
        data_conclusao: Option<NaiveDate>,
        custo_estimado: Option<Decimal>,
        custo_real: Option<Decimal>,
        pagamento: &str,
    ) -> AppResult<Manutencao> {
        let manutencao = sqlx::query_as::<_, Manutencao>(
            r#"
            UPDATE manutencoes
            SET titulo = $2, tipo = $3, status = $4, data_prevista = $5,
                data_conclusao = $6, custo_estimado = $7, custo_real = $8, pagamento = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(titulo)
        .bind(tipo)
        .bind(status)
        .bind(data_prevista)
        .bind(data_conclusao)
        .bind(custo_estimado)
        .bind(custo_real)
        .bind(pagamento)
        .fetch_one(&self.pool)
        .await?;

        Ok(manutencao)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<()> {
        sqlx::query("UPDATE manutencoes SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM manutencoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Manutenções abertas cuja janela de conclusão já passou.
    /// Critério de seleção da varredura periódica.
    pub async fn find_vencidas(&self, hoje: NaiveDate) -> AppResult<Vec<Manutencao>> {
        let manutencoes = sqlx::query_as::<_, Manutencao>(
            r#"
            SELECT * FROM manutencoes
            WHERE status IN ('scheduled', 'in_progress')
              AND data_conclusao IS NOT NULL
              AND data_conclusao < $1
            ORDER BY data_conclusao ASC
            "#,
        )
        .bind(hoje)
        .fetch_all(&self.pool)
        .await?;

        Ok(manutencoes)
    }
}
