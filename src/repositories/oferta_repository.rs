use crate::models::oferta::AcaoOferta;
use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct OfertaRepository {
    pool: PgPool,
}

impl OfertaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        empresa_id: Uuid,
        acao_id: Uuid,
        curso_exame_id: Uuid,
        vagas: i32,
        permite_repeticao: bool,
        intervalo_repeticao_meses: Option<i32>,
    ) -> AppResult<AcaoOferta> {
        let oferta = sqlx::query_as::<_, AcaoOferta>(
            r#"
            INSERT INTO acao_ofertas (id, empresa_id, acao_id, curso_exame_id, vagas,
                                      permite_repeticao, intervalo_repeticao_meses, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(empresa_id)
        .bind(acao_id)
        .bind(curso_exame_id)
        .bind(vagas)
        .bind(permite_repeticao)
        .bind(intervalo_repeticao_meses)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(oferta)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AcaoOferta>> {
        let oferta = sqlx::query_as::<_, AcaoOferta>("SELECT * FROM acao_ofertas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(oferta)
    }

    pub async fn find_by_acao(&self, acao_id: Uuid) -> AppResult<Vec<AcaoOferta>> {
        let ofertas = sqlx::query_as::<_, AcaoOferta>(
            "SELECT * FROM acao_ofertas WHERE acao_id = $1 ORDER BY created_at ASC",
        )
        .bind(acao_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ofertas)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM acao_ofertas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
