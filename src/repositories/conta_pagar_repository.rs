use crate::models::conta_pagar::ContaPagar;
use crate::utils::errors::AppResult;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ContaPagarRepository {
    pool: PgPool,
}

impl ContaPagarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        empresa_id: Uuid,
        caminhao_id: Option<Uuid>,
        manutencao_id: Option<Uuid>,
        descricao: String,
        valor: Decimal,
        data_vencimento: Option<NaiveDate>,
        data_pagamento: Option<NaiveDate>,
        status: &str,
    ) -> AppResult<ContaPagar> {
        let conta = sqlx::query_as::<_, ContaPagar>(
            r#"
            INSERT INTO contas_pagar (id, empresa_id, caminhao_id, manutencao_id, descricao,
                                      valor, data_vencimento, data_pagamento, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(caminhao_id)
        .bind(manutencao_id)
        .bind(descricao)
        .bind(valor)
        .bind(data_vencimento)
        .bind(data_pagamento)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ContaPagar>> {
        let conta = sqlx::query_as::<_, ContaPagar>("SELECT * FROM contas_pagar WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(conta)
    }

    pub async fn find_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<ContaPagar>> {
        let contas = sqlx::query_as::<_, ContaPagar>(
            "SELECT * FROM contas_pagar WHERE empresa_id = $1 ORDER BY data_vencimento ASC NULLS LAST",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(contas)
    }

    /// Conta espelho de uma manutenção, se existir.
    pub async fn find_by_manutencao(&self, manutencao_id: Uuid) -> AppResult<Option<ContaPagar>> {
        let conta = sqlx::query_as::<_, ContaPagar>(
            "SELECT * FROM contas_pagar WHERE manutencao_id = $1",
        )
        .bind(manutencao_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn update_espelho(
        &self,
        id: Uuid,
        descricao: String,
        valor: Decimal,
        data_vencimento: Option<NaiveDate>,
        data_pagamento: Option<NaiveDate>,
        status: &str,
    ) -> AppResult<ContaPagar> {
        let conta = sqlx::query_as::<_, ContaPagar>(
            r#"
            UPDATE contas_pagar
            SET descricao = $2, valor = $3, data_vencimento = $4,
                data_pagamento = $5, status = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(descricao)
        .bind(valor)
        .bind(data_vencimento)
        .bind(data_pagamento)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn marcar_paga(&self, id: Uuid, data_pagamento: NaiveDate) -> AppResult<ContaPagar> {
        let conta = sqlx::query_as::<_, ContaPagar>(
            r#"
            UPDATE contas_pagar
            SET status = 'paid', data_pagamento = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data_pagamento)
        .fetch_one(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM contas_pagar WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_by_manutencao(&self, manutencao_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM contas_pagar WHERE manutencao_id = $1")
            .bind(manutencao_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
